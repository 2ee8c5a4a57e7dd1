//! Domain value objects and shared error types.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Criticality, DecisionInput, DecisionReport, DecisionResult, TimeIndex};
