//! # sepa-xml
//!
//! SEPA payment file generation: ISO 20022 `pain.001` credit transfers and
//! `pain.008` direct debits, in both the older (`pain.001.xxx.02`,
//! `pain.008.xxx.01`) and newer (`pain.001.xxx.03`, `pain.008.xxx.02`)
//! layouts.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Dates are supplied by the caller; nothing reads the system clock.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sepa_xml::core::*;
//! use rust_decimal_macros::dec;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let doc = DocumentBuilder::new("MSG-2024-001", day.and_hms_opt(10, 0, 0).unwrap(), "ACME GmbH")
//!     .pain_version(PainVersion::Pain00100103)
//!     .add_batch(
//!         BatchBuilder::new("PMT-1", day, "ACME GmbH", "DE89370400440532013000", "COBADEFFXXX")
//!             .add_payment(
//!                 PaymentBuilder::new("TX-1", "Kunde AG", "DE02701500000000594937", "SSKMDEMM", dec!(1785))
//!                     .remittance_information("RE-2024-001")
//!                     .end_to_end_reference("RE-2024-001")
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let xml = sepa_xml::generate_sepa_xml(&doc).unwrap();
//! assert!(xml.contains("<CtrlSum>1785.00</CtrlSum>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Payment types, schema variants, validation, document tree |
//! | `xml` (default) | XML serialization via quick-xml |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod pain;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "xml")]
pub use crate::xml::generate_sepa_xml;
