//! Maestro Common Library
//!
//! Closed vocabularies shared by the authorization model and its consumers.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
