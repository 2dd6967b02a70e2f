use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::schema::PainVersion;
use super::types::*;

/// Builder for a [`SepaDocument`].
///
/// Builders never fail; length and account checks run when the document is
/// turned into XML.
///
/// ```
/// use sepa_xml::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let doc = DocumentBuilder::new("MSG-1", day.and_hms_opt(9, 0, 0).unwrap(), "ACME GmbH")
///     .pain_version(PainVersion::Pain00100103)
///     .add_batch(
///         BatchBuilder::new("BATCH-1", day, "ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
///             .add_payment(
///                 PaymentBuilder::new("P-1", "Kunde AG", "DE02701500000000594937", "SSKMDEMM", dec!(49.90))
///                     .remittance_information("RE-2024-001")
///                     .build(),
///             )
///             .build(),
///     )
///     .build();
///
/// assert_eq!(doc.transaction_count(), 1);
/// ```
pub struct DocumentBuilder {
    pain_version: PainVersion,
    xml_version: Option<String>,
    xml_encoding: Option<String>,
    xsi_namespace: Option<String>,
    xsi_xmlns: Option<String>,
    local_instrument: Option<LocalInstrument>,
    sequence_type: Option<SequenceType>,
    batch_booking: Option<bool>,
    check_iban: bool,
    check_bic: bool,
    id: String,
    creation_date: NaiveDateTime,
    initiator_name: String,
    positions: Vec<PaymentBatch>,
}

impl DocumentBuilder {
    pub fn new(
        id: impl Into<String>,
        creation_date: NaiveDateTime,
        initiator_name: impl Into<String>,
    ) -> Self {
        Self {
            pain_version: PainVersion::default(),
            xml_version: None,
            xml_encoding: None,
            xsi_namespace: None,
            xsi_xmlns: None,
            local_instrument: None,
            sequence_type: None,
            batch_booking: None,
            check_iban: false,
            check_bic: false,
            id: id.into(),
            creation_date,
            initiator_name: initiator_name.into(),
            positions: Vec::new(),
        }
    }

    pub fn pain_version(mut self, version: PainVersion) -> Self {
        self.pain_version = version;
        self
    }

    pub fn xml_version(mut self, version: impl Into<String>) -> Self {
        self.xml_version = Some(version.into());
        self
    }

    pub fn xml_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.xml_encoding = Some(encoding.into());
        self
    }

    pub fn xsi_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.xsi_namespace = Some(namespace.into());
        self
    }

    pub fn xsi_xmlns(mut self, prefix: impl Into<String>) -> Self {
        self.xsi_xmlns = Some(prefix.into());
        self
    }

    pub fn local_instrument(mut self, instrument: LocalInstrument) -> Self {
        self.local_instrument = Some(instrument);
        self
    }

    pub fn sequence_type(mut self, sequence: SequenceType) -> Self {
        self.sequence_type = Some(sequence);
        self
    }

    pub fn batch_booking(mut self, booking: bool) -> Self {
        self.batch_booking = Some(booking);
        self
    }

    /// Enable IBAN checksum verification for every account.
    pub fn check_iban(mut self, enabled: bool) -> Self {
        self.check_iban = enabled;
        self
    }

    /// Enable BIC format verification for every agent.
    pub fn check_bic(mut self, enabled: bool) -> Self {
        self.check_bic = enabled;
        self
    }

    pub fn add_batch(mut self, batch: PaymentBatch) -> Self {
        self.positions.push(batch);
        self
    }

    pub fn build(self) -> SepaDocument {
        SepaDocument {
            pain_version: self.pain_version,
            xml_version: self.xml_version,
            xml_encoding: self.xml_encoding,
            xsi_namespace: self.xsi_namespace,
            xsi_xmlns: self.xsi_xmlns,
            local_instrument: self.local_instrument,
            sequence_type: self.sequence_type,
            batch_booking: self.batch_booking,
            check_iban: self.check_iban,
            check_bic: self.check_bic,
            id: self.id,
            creation_date: self.creation_date,
            initiator_name: self.initiator_name,
            positions: self.positions,
        }
    }
}

/// Builder for a [`PaymentBatch`].
pub struct BatchBuilder {
    id: String,
    batch_booking: Option<bool>,
    requested_execution_date: NaiveDate,
    collection_date: Option<NaiveDate>,
    name: String,
    iban: String,
    bic: String,
    payments: Vec<Payment>,
}

impl BatchBuilder {
    pub fn new(
        id: impl Into<String>,
        requested_execution_date: NaiveDate,
        name: impl Into<String>,
        iban: impl Into<String>,
        bic: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            batch_booking: None,
            requested_execution_date,
            collection_date: None,
            name: name.into(),
            iban: iban.into(),
            bic: bic.into(),
            payments: Vec::new(),
        }
    }

    pub fn batch_booking(mut self, booking: bool) -> Self {
        self.batch_booking = Some(booking);
        self
    }

    pub fn collection_date(mut self, date: NaiveDate) -> Self {
        self.collection_date = Some(date);
        self
    }

    pub fn add_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    pub fn build(self) -> PaymentBatch {
        PaymentBatch {
            id: self.id,
            batch_booking: self.batch_booking,
            requested_execution_date: self.requested_execution_date,
            collection_date: self.collection_date,
            name: self.name,
            iban: self.iban,
            bic: self.bic,
            payments: self.payments,
        }
    }
}

/// Builder for a [`Payment`].
pub struct PaymentBuilder {
    id: String,
    name: String,
    iban: String,
    bic: String,
    amount: Decimal,
    mandate_id: Option<String>,
    mandate_signature_date: Option<NaiveDate>,
    currency: Option<String>,
    remittance_information: String,
    end_to_end_reference: Option<String>,
}

impl PaymentBuilder {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        iban: impl Into<String>,
        bic: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            iban: iban.into(),
            bic: bic.into(),
            amount,
            mandate_id: None,
            mandate_signature_date: None,
            currency: None,
            remittance_information: String::new(),
            end_to_end_reference: None,
        }
    }

    pub fn mandate(mut self, id: impl Into<String>, signed: NaiveDate) -> Self {
        self.mandate_id = Some(id.into());
        self.mandate_signature_date = Some(signed);
        self
    }

    pub fn mandate_id(mut self, id: impl Into<String>) -> Self {
        self.mandate_id = Some(id.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn remittance_information(mut self, text: impl Into<String>) -> Self {
        self.remittance_information = text.into();
        self
    }

    pub fn end_to_end_reference(mut self, reference: impl Into<String>) -> Self {
        self.end_to_end_reference = Some(reference.into());
        self
    }

    pub fn build(self) -> Payment {
        Payment {
            id: self.id,
            name: self.name,
            iban: self.iban,
            bic: self.bic,
            mandate_id: self.mandate_id,
            mandate_signature_date: self.mandate_signature_date,
            amount: self.amount,
            currency: self.currency,
            remittance_information: self.remittance_information,
            end_to_end_reference: self.end_to_end_reference,
        }
    }
}
