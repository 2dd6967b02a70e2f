//! Core payment types, schema resolution, validation and formatting.
//!
//! This module describes a SEPA message as plain data and provides the
//! checks and text rendering shared by the `pain` tree builders.

mod builder;
mod error;
pub mod format;
mod schema;
mod types;
pub(crate) mod validation;

pub use builder::*;
pub use error::*;
pub use schema::*;
pub use types::*;
pub use validation::*;
