use thiserror::Error;

/// Errors that can occur while building a SEPA message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// A constrained field exceeded its maximum length.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The schema variant identifier is not recognised.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// IBAN failed the structure or mod-97 check.
    #[error("Invalid IBAN for {field} ({value})")]
    InvalidIban { field: String, value: String },

    /// BIC failed the structure check.
    #[error("Invalid BIC for {field} ({value})")]
    InvalidBic { field: String, value: String },

    /// A payment amount below zero.
    #[error("Amount for {field} must not be negative ({value})")]
    NegativeAmount { field: String, value: String },

    /// Amount arithmetic left the representable range.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A field longer than its documented maximum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Max length for {field} is {limit} ({value})")]
pub struct ValidationError {
    /// Dotted path to the field (e.g. "sepaData.positions[0].payments[2].id").
    pub field: String,
    /// Maximum allowed length in characters.
    pub limit: usize,
    /// The offending value.
    pub value: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, limit: usize, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            limit,
            value: value.into(),
        }
    }
}

/// An unrecognised pain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pain version: {identifier}")]
pub struct SchemaError {
    pub identifier: String,
}

impl SchemaError {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}
