use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::schema::PainVersion;

/// Default currency for transaction amounts.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Default XML declaration version.
pub const DEFAULT_XML_VERSION: &str = "1.0";

/// Default XML declaration encoding.
pub const DEFAULT_XML_ENCODING: &str = "UTF-8";

/// XML Schema instance namespace bound to the `xsi` prefix.
pub const DEFAULT_XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Prefix of the ISO 20022 schema namespace; the pain identifier is appended.
pub const DEFAULT_XSI_XMLNS: &str = "urn:iso:std:iso:20022:tech:xsd:";

/// The whole message: one group header plus its payment batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepaDocument {
    /// Schema variant. Determines root element, layout generation and
    /// whether the batches are credit transfers or direct debits.
    #[serde(default)]
    pub pain_version: PainVersion,
    /// XML declaration version override (default `1.0`).
    #[serde(default)]
    pub xml_version: Option<String>,
    /// XML declaration encoding override (default `UTF-8`).
    #[serde(default)]
    pub xml_encoding: Option<String>,
    /// `xmlns:xsi` override.
    #[serde(default)]
    pub xsi_namespace: Option<String>,
    /// Schema namespace prefix override.
    #[serde(default)]
    pub xsi_xmlns: Option<String>,
    /// Direct debit local instrument (`LclInstrm/Cd`).
    #[serde(default)]
    pub local_instrument: Option<LocalInstrument>,
    /// Direct debit sequence type (`SeqTp`).
    #[serde(default)]
    pub sequence_type: Option<SequenceType>,
    /// Message-level batch booking default (generation 2 only).
    #[serde(default)]
    pub batch_booking: Option<bool>,
    /// Verify every IBAN checksum before building.
    #[serde(default)]
    pub check_iban: bool,
    /// Verify every BIC format before building.
    #[serde(default)]
    pub check_bic: bool,
    /// `MsgId`, max 35 characters.
    pub id: String,
    /// `CreDtTm`, rendered to second precision.
    pub creation_date: NaiveDateTime,
    /// `InitgPty/Nm`, max 70 characters.
    pub initiator_name: String,
    /// Payment batches (`PmtInf`), in output order.
    pub positions: Vec<PaymentBatch>,
}

impl SepaDocument {
    /// Total number of payments across all batches.
    pub fn transaction_count(&self) -> usize {
        self.positions.iter().map(|b| b.payments.len()).sum()
    }

    /// Sum of all payment amounts across all batches (unrounded),
    /// `None` on overflow.
    pub fn control_sum(&self) -> Option<Decimal> {
        self.positions
            .iter()
            .try_fold(Decimal::ZERO, |acc, b| acc.checked_add(b.control_sum()?))
    }
}

/// A group of payments sharing one counterparty account and date (`PmtInf`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBatch {
    /// `PmtInfId`, max 35 characters.
    pub id: String,
    /// Batch booking flag (generation 3 only).
    #[serde(default)]
    pub batch_booking: Option<bool>,
    /// When a credit transfer batch should be executed (`ReqdExctnDt`).
    pub requested_execution_date: NaiveDate,
    /// When a direct debit batch should be collected (`ReqdColltnDt`).
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    /// Debtor (credit transfer) or creditor (direct debit) name, max 70 characters.
    pub name: String,
    pub iban: String,
    pub bic: String,
    pub payments: Vec<Payment>,
}

impl PaymentBatch {
    /// Sum of this batch's payment amounts (unrounded), `None` on overflow.
    pub fn control_sum(&self) -> Option<Decimal> {
        self.payments
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.amount))
    }
}

/// A single transaction inside a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// `InstrId`, max 35 characters.
    pub id: String,
    /// Creditor (credit transfer) or debtor (direct debit) name, max 35 characters.
    pub name: String,
    pub iban: String,
    pub bic: String,
    /// Direct debit mandate reference (`MndtId`).
    #[serde(default)]
    pub mandate_id: Option<String>,
    /// Direct debit mandate signature date (`DtOfSgntr`).
    #[serde(default)]
    pub mandate_signature_date: Option<NaiveDate>,
    /// Non-negative amount.
    pub amount: Decimal,
    /// ISO 4217 currency code; `None` or empty means EUR.
    #[serde(default)]
    pub currency: Option<String>,
    /// Unstructured remittance information (`RmtInf/Ustrd`).
    pub remittance_information: String,
    /// `EndToEndId`; the element is omitted when `None`.
    #[serde(default)]
    pub end_to_end_reference: Option<String>,
}

impl Payment {
    /// Currency code with the EUR fallback applied.
    pub fn currency_code(&self) -> &str {
        match self.currency.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CURRENCY,
        }
    }
}

/// SEPA direct debit scheme (`LclInstrm/Cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocalInstrument {
    /// CORE: consumer direct debit.
    Core,
    /// COR1: consumer direct debit with D-1 presentation.
    Cor1,
    /// B2B: business-to-business direct debit.
    B2b,
}

impl LocalInstrument {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Core => "CORE",
            Self::Cor1 => "COR1",
            Self::B2b => "B2B",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CORE" => Some(Self::Core),
            "COR1" => Some(Self::Cor1),
            "B2B" => Some(Self::B2b),
            _ => None,
        }
    }
}

/// Direct debit sequence type (`SeqTp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    /// FRST: first collection of a recurring mandate.
    #[serde(rename = "FRST")]
    First,
    /// RCUR: follow-up collection.
    #[serde(rename = "RCUR")]
    Recurring,
    /// OOFF: one-off collection.
    #[serde(rename = "OOFF")]
    OneOff,
    /// FNAL: last collection of a recurring mandate.
    #[serde(rename = "FNAL")]
    Final,
}

impl SequenceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::First => "FRST",
            Self::Recurring => "RCUR",
            Self::OneOff => "OOFF",
            Self::Final => "FNAL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FRST" => Some(Self::First),
            "RCUR" => Some(Self::Recurring),
            "OOFF" => Some(Self::OneOff),
            "FNAL" => Some(Self::Final),
            _ => None,
        }
    }
}
