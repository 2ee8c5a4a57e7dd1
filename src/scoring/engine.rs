//! The decision scorer: a pure mapping from the five inputs to indices,
//! per-criterion points, the weighted final score, and the recommendation.

use crate::core::{DecisionInput, DecisionResult, Result, TimeIndex};
use crate::scoring::score_types::Points;
use crate::scoring::tiers::Recommendation;

/// Criterion weights for the final score
///
/// Fixed at 40% cost, 30% time, 30% criticality; kept as a struct so the
/// weighted combination is explicit and the sum invariant is testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeights {
    pub cost: f64,
    pub time: f64,
    pub criticality: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            cost: 0.4,
            time: 0.3,
            criticality: 0.3,
        }
    }
}

impl CriterionWeights {
    // Pure function: Check if a weight is in valid range
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    /// Validate that each weight is in [0, 1] and the three sum to 1.0.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (weight, name) in [
            (self.cost, "cost"),
            (self.time, "time"),
            (self.criticality, "criticality"),
        ] {
            if !Self::is_valid_weight(weight) {
                return Err(format!("{} weight must be between 0.0 and 1.0", name));
            }
        }
        let sum = self.cost + self.time + self.criticality;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "criterion weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }
}

/// Ratio of repair cost to new-part cost, as a percentage.
///
/// Callers must have validated `new_cost > 0`; [`evaluate`] does.
pub fn cost_index(repair_cost: f64, new_cost: f64) -> f64 {
    repair_cost / new_cost * 100.0
}

/// Step function from cost index to criterion points; monotonically
/// non-increasing, boundaries inclusive toward the better score.
fn cost_points(cost_index: f64) -> Points {
    let value = match cost_index {
        x if x <= 30.0 => 5,
        x if x <= 50.0 => 4,
        x if x <= 70.0 => 3,
        x if x <= 90.0 => 2,
        _ => 1,
    };
    Points::new(value)
}

/// Ratio of repair duration to allowed downtime, as a percentage.
/// Zero allowed downtime yields the unbounded branch.
pub fn time_index(repair_time: f64, allowed_downtime: f64) -> TimeIndex {
    if allowed_downtime == 0.0 {
        TimeIndex::Unbounded
    } else {
        TimeIndex::Percent(repair_time / allowed_downtime * 100.0)
    }
}

/// Step function from time index to criterion points. Zero tolerance
/// forces the worst score.
fn time_points(time_index: TimeIndex) -> Points {
    let value = match time_index {
        TimeIndex::Unbounded => 1,
        TimeIndex::Percent(x) if x <= 50.0 => 5,
        TimeIndex::Percent(x) if x <= 80.0 => 4,
        TimeIndex::Percent(x) if x <= 100.0 => 3,
        TimeIndex::Percent(x) if x <= 150.0 => 2,
        TimeIndex::Percent(_) => 1,
    };
    Points::new(value)
}

// Pure function: the weighted combination of the three criteria
fn final_score(
    cost: Points,
    time: Points,
    criticality: Points,
    weights: &CriterionWeights,
) -> f64 {
    cost.as_f64() * weights.cost
        + time.as_f64() * weights.time
        + criticality.as_f64() * weights.criticality
}

/// Evaluate a repair-or-buy decision.
///
/// Deterministic and side-effect free: identical inputs produce
/// bit-identical results. Fails with [`crate::core::Error::InvalidInput`]
/// when the input violates the constrained domain; every numeric branch
/// over valid inputs is total.
pub fn evaluate(input: &DecisionInput) -> Result<DecisionResult> {
    input.validate()?;

    let cost_index = cost_index(input.repair_cost, input.new_cost);
    let cost_points = cost_points(cost_index);

    let time_index = time_index(input.repair_time, input.allowed_downtime);
    let time_points = time_points(time_index);

    let criticality_points = input.criticality.points();

    let weights = CriterionWeights::default();
    debug_assert!(weights.validate().is_ok());
    let final_score = final_score(cost_points, time_points, criticality_points, &weights);
    let recommendation = Recommendation::from_score(final_score);

    log::debug!(
        "evaluated: cost_index={:.1} ({}), time_index={} ({}), criticality={} ({}), score={:.2} -> {}",
        cost_index,
        cost_points,
        time_index,
        time_points,
        input.criticality.label(),
        criticality_points,
        final_score,
        recommendation.short_label()
    );

    Ok(DecisionResult {
        cost_index,
        time_index,
        cost_points,
        time_points,
        criticality_points,
        final_score,
        recommendation,
    })
}
