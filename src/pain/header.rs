use crate::core::format::{format_amount, format_timestamp};
use crate::core::*;

use super::tree::XmlNode;

/// Grouping code written on legacy headers: mixed transaction types.
const GROUPING_MIXED: &str = "MIXD";

/// Build the group header (`GrpHdr`).
pub fn build_group_header(doc: &SepaDocument, generation: Generation) -> Result<XmlNode, SepaError> {
    check_length(&doc.id, "sepaData.id", MAX_ID_LENGTH)?;
    check_length(
        &doc.initiator_name,
        "sepaData.initiatorName",
        MAX_NAME_LENGTH,
    )?;

    let control_sum = doc
        .control_sum()
        .ok_or_else(|| SepaError::Arithmetic("message control sum overflows".into()))?;

    let mut children = vec![
        XmlNode::text("MsgId", &doc.id),
        XmlNode::text("CreDtTm", format_timestamp(doc.creation_date)),
        XmlNode::text("NbOfTxs", doc.transaction_count().to_string()),
        XmlNode::text("CtrlSum", format_amount(control_sum)?),
        XmlNode::element("InitgPty", vec![XmlNode::text("Nm", &doc.initiator_name)]),
    ];

    if generation == Generation::Legacy {
        children.push(XmlNode::text(
            "BtchBookg",
            doc.batch_booking.unwrap_or(false).to_string(),
        ));
        children.push(XmlNode::text("Grpg", GROUPING_MIXED));
    }

    Ok(XmlNode::element("GrpHdr", children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn doc() -> SepaDocument {
        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let batch = |id: &str, amounts: &[rust_decimal::Decimal]| {
            let mut b = BatchBuilder::new(id, day, "Debtor", "DE89370400440532013000", "COBADEFFXXX");
            for (i, a) in amounts.iter().enumerate() {
                b = b.add_payment(
                    PaymentBuilder::new(format!("{id}-{i}"), "Creditor", "DE02701500000000594937", "SSKMDEMM", *a)
                        .build(),
                );
            }
            b.build()
        };
        DocumentBuilder::new("MSG", day.and_hms_opt(8, 30, 0).unwrap(), "Initiator")
            .add_batch(batch("A", &[dec!(1.10), dec!(2.205)]))
            .add_batch(batch("B", &[dec!(10)]))
            .build()
    }

    #[test]
    fn aggregates_span_all_batches() {
        let hdr = build_group_header(&doc(), Generation::Current).unwrap();
        assert_eq!(hdr.find("NbOfTxs").unwrap().text_content(), Some("3"));
        assert_eq!(hdr.find("CtrlSum").unwrap().text_content(), Some("13.31"));
        assert_eq!(hdr.find("CreDtTm").unwrap().text_content(), Some("2024-05-02T08:30:00"));
        assert_eq!(hdr.find("InitgPty/Nm").unwrap().text_content(), Some("Initiator"));
    }

    #[test]
    fn legacy_adds_booking_and_grouping() {
        let d = doc();
        let current = build_group_header(&d, Generation::Current).unwrap();
        assert!(current.find("BtchBookg").is_none());
        assert!(current.find("Grpg").is_none());

        let legacy = build_group_header(&d, Generation::Legacy).unwrap();
        assert_eq!(legacy.find("BtchBookg").unwrap().text_content(), Some("false"));
        assert_eq!(legacy.find("Grpg").unwrap().text_content(), Some("MIXD"));

        let mut booked = d.clone();
        booked.batch_booking = Some(true);
        let legacy = build_group_header(&booked, Generation::Legacy).unwrap();
        assert_eq!(legacy.find("BtchBookg").unwrap().text_content(), Some("true"));
    }

    #[test]
    fn initiator_name_limit_is_70() {
        let mut d = doc();
        d.initiator_name = "x".repeat(70);
        assert!(build_group_header(&d, Generation::Current).is_ok());
        d.initiator_name.push('x');
        let err = build_group_header(&d, Generation::Current).unwrap_err();
        assert!(err.to_string().starts_with("Max length for sepaData.initiatorName is 70 ("));
    }
}
