//! XML serialization of pain document trees.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sepa_xml::core::*;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let doc = DocumentBuilder::new("MSG-1", day.and_hms_opt(9, 0, 0).unwrap(), "ACME GmbH")
//!     .add_batch(
//!         BatchBuilder::new("BATCH-1", day, "ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
//!             .add_payment(
//!                 PaymentBuilder::new("P-1", "Kunde AG", "DE02701500000000594937", "SSKMDEMM", dec!(49.9))
//!                     .remittance_information("RE-2024-001")
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let xml = sepa_xml::xml::generate_sepa_xml(&doc).unwrap();
//! assert!(xml.contains("<InstdAmt Ccy=\"EUR\">49.90</InstdAmt>"));
//! ```

mod writer;

pub use writer::XmlWriter;

use crate::core::*;
use crate::pain::{XmlNode, build_document};

/// Values of the `<?xml …?>` declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: String,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            version: DEFAULT_XML_VERSION.into(),
            encoding: DEFAULT_XML_ENCODING.into(),
        }
    }
}

impl XmlDeclaration {
    /// Declaration for `doc`, applying its version/encoding overrides.
    pub fn for_document(doc: &SepaDocument) -> Self {
        let defaults = Self::default();
        Self {
            version: doc.xml_version.clone().unwrap_or(defaults.version),
            encoding: doc.xml_encoding.clone().unwrap_or(defaults.encoding),
        }
    }
}

/// Render a tree as an indented XML document.
pub fn to_xml(root: &XmlNode, declaration: &XmlDeclaration) -> Result<String, SepaError> {
    let mut w = XmlWriter::new(declaration)?;
    w.write_node(root)?;
    w.finish()
}

/// Build and serialize a complete pain message.
///
/// Returns the XML text, or the first error encountered. Nothing is
/// serialized unless the whole tree was built successfully.
pub fn generate_sepa_xml(doc: &SepaDocument) -> Result<String, SepaError> {
    let tree = build_document(doc)?;
    let xml = to_xml(&tree, &XmlDeclaration::for_document(doc))?;
    tracing::debug!(
        pain_version = %doc.pain_version,
        bytes = xml.len(),
        "serialized SEPA document"
    );
    Ok(xml)
}
