//! Core value objects for the repair-or-buy decision model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::scoring::{Points, Recommendation};

/// Operational importance tier of the component under evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl Criticality {
    /// Criterion points for this tier: the less critical the component,
    /// the more attractive a repair attempt is.
    pub fn points(self) -> Points {
        match self {
            Criticality::Low => Points::new(5),
            Criticality::Medium => Points::new(3),
            Criticality::High => Points::new(1),
        }
    }

    /// Get tier label for display
    pub fn label(self) -> &'static str {
        match self {
            Criticality::Low => "Low",
            Criticality::Medium => "Medium",
            Criticality::High => "High",
        }
    }
}

/// The five inputs of a single evaluation.
///
/// Constructed fresh per evaluation; carries no lifecycle. The numeric
/// constraints (§[`DecisionInput::validate`]) are enforced by the scorer
/// before any arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// Cost of repairing the component (currency)
    pub repair_cost: f64,
    /// Time to complete the repair (days)
    pub repair_time: f64,
    /// Cost of a new replacement part (currency)
    pub new_cost: f64,
    /// Downtime the operation can tolerate (days); zero means zero tolerance
    pub allowed_downtime: f64,
    /// Operational criticality of the component
    pub criticality: Criticality,
}

impl DecisionInput {
    /// Validate the constrained numeric domain:
    /// repair_cost >= 0, repair_time > 0, new_cost > 0, allowed_downtime >= 0,
    /// all finite.
    ///
    /// A non-positive `new_cost` is a hard failure rather than the "very
    /// high cost index" sentinel: the sentinel silently produces a
    /// misleading score instead of signaling bad input.
    pub fn validate(&self) -> Result<()> {
        Self::require_finite("repair_cost", self.repair_cost)?;
        Self::require_finite("repair_time", self.repair_time)?;
        Self::require_finite("new_cost", self.new_cost)?;
        Self::require_finite("allowed_downtime", self.allowed_downtime)?;

        if self.repair_cost < 0.0 {
            return Err(Error::invalid_input(
                "repair_cost",
                format!("must be non-negative, got {}", self.repair_cost),
            ));
        }
        if self.repair_time <= 0.0 {
            return Err(Error::invalid_input(
                "repair_time",
                format!("must be positive, got {}", self.repair_time),
            ));
        }
        if self.new_cost <= 0.0 {
            return Err(Error::invalid_input(
                "new_cost",
                format!("must be positive, got {}", self.new_cost),
            ));
        }
        if self.allowed_downtime < 0.0 {
            return Err(Error::invalid_input(
                "allowed_downtime",
                format!("must be non-negative, got {}", self.allowed_downtime),
            ));
        }
        Ok(())
    }

    fn require_finite(field: &'static str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Error::invalid_input(field, format!("must be finite, got {}", value)))
        }
    }
}

/// Ratio of repair duration to allowed downtime, as a percentage.
///
/// Zero allowed downtime is a first-class branch, not an error: the
/// operation tolerates no stoppage at all, so the index is unbounded and
/// the time criterion scores worst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "percent")]
pub enum TimeIndex {
    /// Allowed downtime is zero; any repair duration exceeds it
    Unbounded,
    /// repair_time / allowed_downtime × 100
    Percent(f64),
}

impl TimeIndex {
    pub fn as_percent(self) -> Option<f64> {
        match self {
            TimeIndex::Unbounded => None,
            TimeIndex::Percent(p) => Some(p),
        }
    }
}

impl std::fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeIndex::Unbounded => write!(f, "unbounded"),
            TimeIndex::Percent(p) => write!(f, "{:.1}%", p),
        }
    }
}

/// Outcome of one evaluation: the two indices, the three per-criterion
/// point values, the weighted final score, and the derived recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// repair_cost / new_cost × 100; always defined because new_cost > 0
    pub cost_index: f64,
    pub time_index: TimeIndex,
    pub cost_points: Points,
    pub time_points: Points,
    pub criticality_points: Points,
    /// Weighted combination in [1.0, 5.0]
    pub final_score: f64,
    pub recommendation: Recommendation,
}

/// Presentation envelope handed to the report writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionReport {
    pub input: DecisionInput,
    pub result: DecisionResult,
    pub generated_at: DateTime<Utc>,
}

impl DecisionReport {
    pub fn new(input: DecisionInput, result: DecisionResult) -> Self {
        Self {
            input,
            result,
            generated_at: Utc::now(),
        }
    }
}
