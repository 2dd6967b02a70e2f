use crate::core::format::{format_amount, format_date};
use crate::core::validation::{batch_field, check_accounts};
use crate::core::*;

use super::transaction::build_transactions;
use super::tree::XmlNode;

/// SEPA service level code.
const SERVICE_LEVEL_SEPA: &str = "SEPA";

/// Charge bearer: shared, following the service level.
const CHARGE_BEARER_SLEV: &str = "SLEV";

/// Proprietary scheme name of the creditor identifier.
const CREDITOR_SCHEME_SEPA: &str = "SEPA";

/// Build one `PmtInf` block per batch, in input order.
pub fn build_payment_batches(
    doc: &SepaDocument,
    version: PainVersion,
) -> Result<Vec<XmlNode>, SepaError> {
    doc.positions
        .iter()
        .enumerate()
        .map(|(index, batch)| build_payment_batch(doc, version, batch, index))
        .collect()
}

fn build_payment_batch(
    doc: &SepaDocument,
    version: PainVersion,
    batch: &PaymentBatch,
    index: usize,
) -> Result<XmlNode, SepaError> {
    check_length(&batch.id, &batch_field(index, "id"), MAX_ID_LENGTH)?;
    check_length(&batch.name, &batch_field(index, "name"), MAX_NAME_LENGTH)?;
    check_accounts(doc, &batch.iban, &batch.bic, |f| batch_field(index, f))?;

    let family = version.family();
    tracing::trace!(
        batch = index,
        id = %batch.id,
        payments = batch.payments.len(),
        "assembling payment batch"
    );

    let mut payment_type = vec![XmlNode::element(
        "SvcLvl",
        vec![XmlNode::text("Cd", SERVICE_LEVEL_SEPA)],
    )];
    if family == TransactionFamily::DirectDebit {
        let code = doc.local_instrument.map(|l| l.code()).unwrap_or_default();
        payment_type.push(XmlNode::element(
            "LclInstrm",
            vec![XmlNode::text("Cd", code)],
        ));
    }

    let mut children = vec![
        XmlNode::text("PmtInfId", &batch.id),
        XmlNode::text("PmtMtd", family.payment_method()),
        XmlNode::element("PmtTpInf", payment_type),
        XmlNode::text("ChrgBr", CHARGE_BEARER_SLEV),
    ];

    if version.generation() == Generation::Current {
        let control_sum = batch.control_sum().ok_or_else(|| {
            SepaError::Arithmetic(format!("control sum of {} overflows", batch_field(index, "payments")))
        })?;
        children.push(XmlNode::text(
            "BtchBookg",
            batch.batch_booking.unwrap_or(false).to_string(),
        ));
        children.push(XmlNode::text("NbOfTxs", batch.payments.len().to_string()));
        children.push(XmlNode::text("CtrlSum", format_amount(control_sum)?));
    }

    match family {
        TransactionFamily::DirectDebit => {
            if let Some(seq) = doc.sequence_type {
                children.push(XmlNode::text("SeqTp", seq.code()));
            }
            if let Some(date) = batch.collection_date {
                children.push(XmlNode::text("ReqdColltnDt", format_date(date)));
            }
            children.push(XmlNode::element("Cdtr", vec![XmlNode::text("Nm", &batch.name)]));
            children.push(account("CdtrAcct", &batch.iban));
            children.push(agent("CdtrAgt", &batch.bic));
            children.push(creditor_scheme_id(&batch.id));
        }
        TransactionFamily::CreditTransfer => {
            children.push(XmlNode::text(
                "ReqdExctnDt",
                format_date(batch.requested_execution_date),
            ));
            children.push(XmlNode::element("Dbtr", vec![XmlNode::text("Nm", &batch.name)]));
            children.push(account("DbtrAcct", &batch.iban));
            children.push(agent("DbtrAgt", &batch.bic));
        }
    }

    children.push(XmlNode::List(build_transactions(doc, family, batch, index)?));

    Ok(XmlNode::element("PmtInf", children))
}

/// `<name><Id><IBAN>…</IBAN></Id></name>`
pub(crate) fn account(name: &'static str, iban: &str) -> XmlNode {
    XmlNode::element(
        name,
        vec![XmlNode::element("Id", vec![XmlNode::text("IBAN", iban)])],
    )
}

/// `<name><FinInstnId><BIC>…</BIC></FinInstnId></name>`
pub(crate) fn agent(name: &'static str, bic: &str) -> XmlNode {
    XmlNode::element(
        name,
        vec![XmlNode::element("FinInstnId", vec![XmlNode::text("BIC", bic)])],
    )
}

/// Creditor scheme identification. The batch id stands in for the creditor
/// identifier.
fn creditor_scheme_id(id: &str) -> XmlNode {
    XmlNode::element(
        "CdtrSchmeId",
        vec![XmlNode::element(
            "Id",
            vec![XmlNode::element(
                "PrvtId",
                vec![XmlNode::element(
                    "Othr",
                    vec![
                        XmlNode::text("Id", id),
                        XmlNode::element(
                            "SchmeNm",
                            vec![XmlNode::text("Prtry", CREDITOR_SCHEME_SEPA)],
                        ),
                    ],
                )],
            )],
        )],
    )
}
