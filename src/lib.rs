// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod formatting;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Criticality, DecisionInput, DecisionReport, DecisionResult, Error, TimeIndex,
};

pub use crate::io::output::{create_writer, render_report, OutputFormat, OutputWriter};

pub use crate::scoring::{evaluate, CriterionWeights, Points, Recommendation};
