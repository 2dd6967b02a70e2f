#![cfg(feature = "xml")]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sepa_xml::core::*;
use sepa_xml::generate_sepa_xml;

const EXPECTED_PAIN_001_001_02: &str = include_str!("fixtures/pain.001.001.02.xml");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn created() -> NaiveDateTime {
    date(2022, 6, 15).and_hms_opt(22, 0, 0).unwrap()
}

fn payment(id: &str, amount: Decimal, remittance: &str) -> PaymentBuilder {
    PaymentBuilder::new(id, "Test", "DE02701500000000594937", "SSKMDEMM", amount)
        .remittance_information(remittance)
}

fn three_payment_batch(currency: Option<&str>) -> PaymentBatch {
    let mut batch = BatchBuilder::new(
        "123",
        date(2022, 6, 15),
        "Test",
        "DE02701500000000594937",
        "SSKMDEMM",
    );
    for (id, amount, text) in [
        ("Payment 1 ", dec!(123), "WOW 1"),
        ("Payment 2", dec!(123.83), "WOW 2"),
        ("Payment 3", dec!(69), "WOW 3"),
    ] {
        let mut p = payment(id, amount, text);
        if let Some(c) = currency {
            p = p.currency(c);
        }
        batch = batch.add_payment(p.build());
    }
    batch.build()
}

fn scenario(version: PainVersion, currency: Option<&str>) -> SepaDocument {
    DocumentBuilder::new("1", created(), "Test")
        .pain_version(version)
        .add_batch(three_payment_batch(currency))
        .build()
}

// --- Legacy layout, full output ---

#[test]
fn legacy_credit_transfer_full_document() {
    let xml = generate_sepa_xml(&scenario(PainVersion::Pain00100102, None)).unwrap();
    assert_eq!(xml, EXPECTED_PAIN_001_001_02);
}

#[test]
fn currency_override_changes_only_ccy() {
    let xml = generate_sepa_xml(&scenario(PainVersion::Pain00100102, Some("USD"))).unwrap();
    let expected = EXPECTED_PAIN_001_001_02.replace("Ccy=\"EUR\"", "Ccy=\"USD\"");
    assert_eq!(xml, expected);
    assert_eq!(xml.matches("Ccy=\"USD\"").count(), 3);
    assert!(xml.contains("<CtrlSum>315.83</CtrlSum>"));
    assert!(xml.contains("<NbOfTxs>3</NbOfTxs>"));
}

#[test]
fn idempotent_output() {
    let doc = scenario(PainVersion::Pain00100103, None);
    let first = generate_sepa_xml(&doc).unwrap();
    let second = generate_sepa_xml(&doc).unwrap();
    assert_eq!(first, second);
}

// --- Current layout ---

#[test]
fn current_credit_transfer_layout() {
    let xml = generate_sepa_xml(&scenario(PainVersion::Pain00100103, None)).unwrap();

    assert!(xml.contains(
        "<Document xmlns=\"urn:iso:std:iso:20022:tech:xsd:pain.001.001.03\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"urn:iso:std:iso:20022:tech:xsd:pain.001.001.03 pain.001.001.03.xsd\">"
    ));
    assert!(xml.contains("\n  <CstmrCdtTrfInitn>\n"));
    assert!(!xml.contains("<Grpg>"));

    // Group header: no booking flag; batch: booking, count and sum.
    let header = &xml[xml.find("<GrpHdr>").unwrap()..xml.find("</GrpHdr>").unwrap()];
    assert!(!header.contains("BtchBookg"));
    let batch = &xml[xml.find("<PmtInf>").unwrap()..];
    assert!(batch.contains(
        "<ChrgBr>SLEV</ChrgBr>\n      \
         <BtchBookg>false</BtchBookg>\n      \
         <NbOfTxs>3</NbOfTxs>\n      \
         <CtrlSum>315.83</CtrlSum>\n      \
         <ReqdExctnDt>2022-06-15</ReqdExctnDt>"
    ));
}

#[test]
fn pain_001_003_03_shares_root_element() {
    let xml = generate_sepa_xml(&scenario(PainVersion::Pain00100303, None)).unwrap();
    assert!(xml.contains("<CstmrCdtTrfInitn>"));
    assert!(xml.contains("xmlns=\"urn:iso:std:iso:20022:tech:xsd:pain.001.003.03\""));
    let legacy = generate_sepa_xml(&scenario(PainVersion::Pain00100302, None)).unwrap();
    assert!(legacy.contains("<pain.001.003.02>"));
    assert!(legacy.contains("<Grpg>MIXD</Grpg>"));
}

#[test]
fn batch_booking_flags() {
    let mut doc = scenario(PainVersion::Pain00100103, None);
    doc.positions[0].batch_booking = Some(true);
    let xml = generate_sepa_xml(&doc).unwrap();
    assert!(xml.contains("<BtchBookg>true</BtchBookg>"));

    let mut doc = scenario(PainVersion::Pain00100102, None);
    doc.batch_booking = Some(true);
    doc.positions[0].batch_booking = Some(false);
    let xml = generate_sepa_xml(&doc).unwrap();
    assert_eq!(xml.matches("<BtchBookg>").count(), 1);
    assert!(xml.contains("<BtchBookg>true</BtchBookg>\n      <Grpg>MIXD</Grpg>"));
}

// --- Aggregates ---

#[test]
fn totals_span_batches() {
    let second = BatchBuilder::new(
        "456",
        date(2022, 6, 20),
        "Other",
        "DE89370400440532013000",
        "COBADEFFXXX",
    )
    .add_payment(payment("Payment 4", dec!(0.125), "x").build())
    .add_payment(payment("Payment 5", dec!(10.005), "y").build())
    .build();
    let doc = DocumentBuilder::new("MSG", created(), "Init")
        .add_batch(three_payment_batch(None))
        .add_batch(second)
        .build();

    let xml = generate_sepa_xml(&doc).unwrap();
    let header = &xml[xml.find("<GrpHdr>").unwrap()..xml.find("</GrpHdr>").unwrap()];
    assert!(header.contains("<NbOfTxs>5</NbOfTxs>"));
    // 315.83 + 0.125 + 10.005 = 325.96
    assert!(header.contains("<CtrlSum>325.96</CtrlSum>"));

    // Per batch: 315.83 and 10.13
    assert!(xml.contains("<CtrlSum>315.83</CtrlSum>"));
    assert!(xml.contains("<CtrlSum>10.13</CtrlSum>"));
    assert!(xml.contains("<InstdAmt Ccy=\"EUR\">0.13</InstdAmt>"));
    assert!(xml.contains("<InstdAmt Ccy=\"EUR\">10.01</InstdAmt>"));
    assert!(xml.contains("<ReqdExctnDt>2022-06-20</ReqdExctnDt>"));

    // Batches keep input order.
    assert!(xml.find("<PmtInfId>123</PmtInfId>").unwrap() < xml.find("<PmtInfId>456</PmtInfId>").unwrap());
}

#[test]
fn empty_document_has_zero_totals() {
    let doc = DocumentBuilder::new("EMPTY", created(), "Init").build();
    let xml = generate_sepa_xml(&doc).unwrap();
    assert!(xml.contains("<NbOfTxs>0</NbOfTxs>"));
    assert!(xml.contains("<CtrlSum>0.00</CtrlSum>"));
    assert!(!xml.contains("<PmtInf>"));
}

// --- Optional elements ---

#[test]
fn end_to_end_reference_only_when_given() {
    let batch = BatchBuilder::new("B", date(2024, 1, 2), "Debtor", "DE89370400440532013000", "COBADEFFXXX")
        .add_payment(payment("WITH", dec!(1), "a").end_to_end_reference("E2E-42").build())
        .add_payment(payment("WITHOUT", dec!(1), "b").build())
        .build();
    let doc = DocumentBuilder::new("M", created(), "I").add_batch(batch).build();
    let xml = generate_sepa_xml(&doc).unwrap();

    assert!(xml.contains(
        "<PmtId>\n          <InstrId>WITH</InstrId>\n          <EndToEndId>E2E-42</EndToEndId>\n        </PmtId>"
    ));
    assert!(xml.contains("<PmtId>\n          <InstrId>WITHOUT</InstrId>\n        </PmtId>"));
    assert_eq!(xml.matches("EndToEndId").count(), 2);
}

#[test]
fn declaration_overrides() {
    let mut doc = scenario(PainVersion::Pain00100103, None);
    doc.xml_version = Some("1.1".into());
    doc.xml_encoding = Some("ISO-8859-15".into());
    let xml = generate_sepa_xml(&doc).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.1\" encoding=\"ISO-8859-15\"?>\n<Document "));
}

#[test]
fn remittance_text_is_escaped() {
    let batch = BatchBuilder::new("B", date(2024, 1, 2), "Debtor", "DE89370400440532013000", "COBADEFFXXX")
        .add_payment(payment("P", dec!(1), "Smith & Sons <Inv 7>").build())
        .build();
    let doc = DocumentBuilder::new("M", created(), "I").add_batch(batch).build();
    let xml = generate_sepa_xml(&doc).unwrap();
    assert!(xml.contains("<Ustrd>Smith &amp; Sons &lt;Inv 7&gt;</Ustrd>"));
}
