use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sepa_xml::core::*;

fn main() {
    // Monthly membership fees collected from two members
    let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let doc = DocumentBuilder::new("DD-2024-05", day.and_hms_opt(7, 0, 0).unwrap(), "Sportverein e.V.")
        .pain_version(PainVersion::Pain00800102)
        .local_instrument(LocalInstrument::Core)
        .sequence_type(SequenceType::Recurring)
        .add_batch(
            BatchBuilder::new("DE98ZZZ09999999999", day, "Sportverein e.V.", "DE89370400440532013000", "COBADEFFXXX")
                .collection_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
                .add_payment(
                    PaymentBuilder::new("MEMBER-001", "Max Mustermann", "DE02701500000000594937", "SSKMDEMM", dec!(45))
                        .mandate("MANDATE-001", NaiveDate::from_ymd_opt(2021, 3, 1).unwrap())
                        .remittance_information("Beitrag Mai 2024")
                        .end_to_end_reference("DD-2024-05-001")
                        .build(),
                )
                .add_payment(
                    PaymentBuilder::new("MEMBER-002", "Erika Musterfrau", "DE02701500000000594937", "SSKMDEMM", dec!(22.50))
                        .mandate("MANDATE-002", NaiveDate::from_ymd_opt(2022, 9, 15).unwrap())
                        .remittance_information("Beitrag Mai 2024 (ermäßigt)")
                        .build(),
                )
                .build(),
        )
        .build();

    let version = doc.pain_version;
    println!("Schema:      {} ({})", version, version.root_element());
    println!("Method:      {}", version.family().payment_method());
    println!(
        "Instrument:  {}",
        doc.local_instrument.map(|l| l.code()).unwrap_or("-")
    );
    println!(
        "Sequence:    {}",
        doc.sequence_type.map(|s| s.code()).unwrap_or("-")
    );
    println!("---");

    match sepa_xml::generate_sepa_xml(&doc) {
        Ok(xml) => println!("{}", xml),
        Err(e) => eprintln!("Generation failed: {}", e),
    }
}
