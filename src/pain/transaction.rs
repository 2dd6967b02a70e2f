use crate::core::format::{format_amount, format_date};
use crate::core::validation::{check_accounts, payment_field};
use crate::core::*;

use super::batch::{account, agent};
use super::tree::XmlNode;

/// Build the transaction blocks of one batch, in input order.
pub fn build_transactions(
    doc: &SepaDocument,
    family: TransactionFamily,
    batch: &PaymentBatch,
    batch_index: usize,
) -> Result<Vec<XmlNode>, SepaError> {
    batch
        .payments
        .iter()
        .enumerate()
        .map(|(index, payment)| build_transaction(doc, family, payment, batch_index, index))
        .collect()
}

fn build_transaction(
    doc: &SepaDocument,
    family: TransactionFamily,
    payment: &Payment,
    batch_index: usize,
    index: usize,
) -> Result<XmlNode, SepaError> {
    let path = |field: &str| payment_field(batch_index, index, field);
    check_length(&payment.id, &path("id"), MAX_ID_LENGTH)?;
    check_length(&payment.name, &path("name"), MAX_PAYMENT_NAME_LENGTH)?;
    check_amount(payment.amount, &path("amount"))?;
    check_accounts(doc, &payment.iban, &payment.bic, path)?;

    let mut payment_id = vec![XmlNode::text("InstrId", &payment.id)];
    if let Some(reference) = payment.end_to_end_reference.as_deref().filter(|r| !r.is_empty()) {
        payment_id.push(XmlNode::text("EndToEndId", reference));
    }

    let mut children = vec![
        XmlNode::element("PmtId", payment_id),
        XmlNode::element(
            "RmtInf",
            vec![XmlNode::text("Ustrd", &payment.remittance_information)],
        ),
    ];

    let currency = vec![("Ccy", payment.currency_code().to_string())];
    let amount = format_amount(payment.amount)?;

    match family {
        TransactionFamily::DirectDebit => {
            // Currency sits on Amt itself, InstdAmt is a plain child.
            children.push(XmlNode::element_with_attrs(
                "Amt",
                currency,
                vec![XmlNode::text("InstdAmt", amount)],
            ));
            let signed = payment
                .mandate_signature_date
                .map(format_date)
                .unwrap_or_default();
            children.push(XmlNode::element(
                "DrctDbtTx",
                vec![XmlNode::element(
                    "MndtRltdInf",
                    vec![
                        XmlNode::text("MndtId", payment.mandate_id.as_deref().unwrap_or_default()),
                        XmlNode::text("DtOfSgntr", signed),
                    ],
                )],
            ));
            children.push(account("DbtrAcct", &payment.iban));
            children.push(agent("DbtrAgt", &payment.bic));
            children.push(XmlNode::element("Dbtr", vec![XmlNode::text("Nm", &payment.name)]));
        }
        TransactionFamily::CreditTransfer => {
            children.push(XmlNode::element(
                "Amt",
                vec![XmlNode::text_with_attrs("InstdAmt", currency, amount)],
            ));
            children.push(account("CdtrAcct", &payment.iban));
            children.push(agent("CdtrAgt", &payment.bic));
            children.push(XmlNode::element("Cdtr", vec![XmlNode::text("Nm", &payment.name)]));
        }
    }

    Ok(XmlNode::element(family.transaction_element(), children))
}
