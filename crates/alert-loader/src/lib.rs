//! Alert Source Loading
//!
//! Reads alert batches from JSON and validates each entry before handing the
//! batch to the processing core.

mod error;
mod loader;
mod validator;

pub use error::{LoadError, ValidationError};
pub use loader::{parse_document, JsonFileSource, JsonStrSource, LoadReport, RejectedEntry};
pub use validator::Validator;
