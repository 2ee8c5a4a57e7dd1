//! CLI command implementations.
//!
//! Each submodule handles one subcommand with its configuration and
//! execution logic:
//! - **evaluate**: score a repair-or-buy decision and render the report
//! - **methodology**: print the scoring methodology reference

pub mod evaluate;
pub mod methodology;

pub use evaluate::{handle_evaluate, EvaluateConfig};
pub use methodology::handle_methodology;
