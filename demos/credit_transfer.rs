use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sepa_xml::core::*;

fn main() {
    // Salary run: one debtor account, two creditors
    let day = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    let doc = DocumentBuilder::new("SAL-2024-06", day.and_hms_opt(9, 15, 0).unwrap(), "ACME GmbH")
        .pain_version(PainVersion::Pain00100303)
        .check_iban(true)
        .check_bic(true)
        .add_batch(
            BatchBuilder::new("SAL-2024-06-A", day, "ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
                .batch_booking(true)
                .add_payment(
                    PaymentBuilder::new("SAL-0001", "Max Mustermann", "DE02701500000000594937", "SSKMDEMM", dec!(3250.00))
                        .remittance_information("Gehalt Juni 2024")
                        .end_to_end_reference("SAL-2024-06-0001")
                        .build(),
                )
                .add_payment(
                    PaymentBuilder::new("SAL-0002", "Erika Musterfrau", "DE02701500000000594937", "SSKMDEMM", dec!(2890.455))
                        .remittance_information("Gehalt Juni 2024")
                        .build(),
                )
                .build(),
        )
        .build();

    println!("Message:  {}", doc.id);
    println!("Schema:   {}", doc.pain_version);
    println!("Payments: {}", doc.transaction_count());
    match doc.control_sum() {
        Some(sum) => println!("Total:    {} EUR", sum),
        None => println!("Total:    overflow"),
    }
    println!("---");

    match sepa_xml::generate_sepa_xml(&doc) {
        Ok(xml) => println!("{}", xml),
        Err(e) => eprintln!("Generation failed: {}", e),
    }
}
