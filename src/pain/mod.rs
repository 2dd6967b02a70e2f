//! pain.001 / pain.008 document tree assembly.
//!
//! Turns a [`SepaDocument`] into an [`XmlNode`] tree:
//!
//! ```text
//! Document (xmlns, xmlns:xsi, xsi:schemaLocation)
//! └── <root element of the pain version>
//!     ├── GrpHdr
//!     └── PmtInf*            one per batch
//!         └── CdtTrfTxInf* / DrctDbtTxInf*   one per payment
//! ```
//!
//! Every length and account check runs while the tree is built. The first
//! failure aborts the build and no tree is returned.

mod batch;
mod header;
mod transaction;
pub mod tree;

pub use batch::build_payment_batches;
pub use header::build_group_header;
pub use transaction::build_transactions;
pub use tree::XmlNode;

use crate::core::*;

/// Build the full `Document` tree for `doc`.
pub fn build_document(doc: &SepaDocument) -> Result<XmlNode, SepaError> {
    let version = doc.pain_version;
    tracing::debug!(
        pain_version = %version,
        batches = doc.positions.len(),
        transactions = doc.transaction_count(),
        "building SEPA document tree"
    );

    let header = build_group_header(doc, version.generation())?;
    let batches = build_payment_batches(doc, version)?;

    let message = XmlNode::element(
        version.root_element(),
        vec![header, XmlNode::List(batches)],
    );

    Ok(XmlNode::element_with_attrs(
        "Document",
        document_attributes(doc),
        vec![message],
    ))
}

/// `xmlns`, `xmlns:xsi` and `xsi:schemaLocation` of the `Document` element.
fn document_attributes(doc: &SepaDocument) -> Vec<(&'static str, String)> {
    let id = doc.pain_version.id();
    let xmlns = doc.xsi_xmlns.as_deref().unwrap_or(DEFAULT_XSI_XMLNS);
    let xsi = doc.xsi_namespace.as_deref().unwrap_or(DEFAULT_XSI_NAMESPACE);
    vec![
        ("xmlns", format!("{xmlns}{id}")),
        ("xmlns:xsi", xsi.to_string()),
        ("xsi:schemaLocation", format!("{xmlns}{id} {id}.xsd")),
    ]
}
