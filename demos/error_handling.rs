use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sepa_xml::core::*;

fn sample(day: NaiveDate) -> SepaDocument {
    DocumentBuilder::new("ERR-2024-001", day.and_hms_opt(12, 0, 0).unwrap(), "ACME GmbH")
        .add_batch(
            BatchBuilder::new("PMT-1", day, "ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
                .add_payment(
                    PaymentBuilder::new("TX-1", "Kunde AG", "DE02701500000000594937", "SSKMDEMM", dec!(100))
                        .remittance_information("RE-2024-001")
                        .build(),
                )
                .build(),
        )
        .build()
}

fn main() {
    let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // ── 1. Field too long: generation stops at the first violation ────
    println!("=== Length Limit ===");
    let mut doc = sample(day);
    doc.positions[0].payments[0].name = "Kunde AG mit einem sehr langen Firmennamen".into();
    match sepa_xml::generate_sepa_xml(&doc) {
        Ok(_) => println!("  Generated (unexpected)"),
        Err(SepaError::Validation(e)) => {
            println!("  {}", e);
            println!("  field={} limit={}", e.field, e.limit);
        }
        Err(e) => println!("  Other error: {}", e),
    }

    // ── 2. validate_document collects every problem ───────────────────
    println!("\n=== validate_document() ===");
    let mut doc = sample(day);
    doc.id = "ERR-2024-001-WITH-A-SUFFIX-THAT-IS-TOO-LONG".into();
    doc.positions[0].payments[0].amount = dec!(-5);
    doc.positions[0].payments[0].iban = "DE00370400440532013000".into();
    doc.check_iban = true;
    let errors = validate_document(&doc);
    println!("  Found {} errors:", errors.len());
    for e in &errors {
        println!("  - {}", e);
    }

    // ── 3. Account checks are opt-in ──────────────────────────────────
    println!("\n=== IBAN / BIC ===");
    let mut doc = sample(day);
    doc.positions[0].bic = "COBA".into();
    println!("  unchecked: {}", sepa_xml::generate_sepa_xml(&doc).is_ok());
    doc.check_bic = true;
    match sepa_xml::generate_sepa_xml(&doc) {
        Ok(_) => println!("  checked:   generated (unexpected)"),
        Err(e) => println!("  checked:   {}", e),
    }

    // ── 4. Unknown schema identifiers ─────────────────────────────────
    println!("\n=== Schema Identifiers ===");
    for id in ["pain.008.003.02", "pain.001.001.09"] {
        match id.parse::<PainVersion>() {
            Ok(v) => println!("  {} -> root {}", v, v.root_element()),
            Err(e) => println!("  {}", e),
        }
    }
}
