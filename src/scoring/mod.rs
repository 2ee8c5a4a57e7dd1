//! Decision scoring: indices, criterion points, and tier classification.

pub mod engine;
pub mod score_types;
pub mod tiers;

pub use engine::{cost_index, evaluate, time_index, CriterionWeights};
pub use score_types::Points;
pub use tiers::Recommendation;
