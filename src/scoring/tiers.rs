/// Recommendation tiers for the repair-or-buy decision
///
/// The final score maps onto four ordered outcomes. Thresholds are
/// inclusive on the lower bound of each tier, so ties land in the more
/// repair-favorable tier.
use serde::{Deserialize, Serialize};

/// Ordered decision outcome derived from thresholding the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Final score >= 4.5: excellent scenario for repair
    StronglyRepair,

    /// Final score >= 4.0: repair is viable but deserves attention
    RepairWithCaution,

    /// Final score >= 3.0: leaning toward buying new; weigh the risks
    LeanBuy,

    /// Final score < 3.0: buy a new part
    Buy,
}

impl Recommendation {
    /// Classify a final score into its recommendation tier.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Recommendation::StronglyRepair
        } else if score >= 4.0 {
            Recommendation::RepairWithCaution
        } else if score >= 3.0 {
            Recommendation::LeanBuy
        } else {
            Recommendation::Buy
        }
    }

    /// Get recommendation label for display
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StronglyRepair => "Excellent scenario for repair",
            Recommendation::RepairWithCaution => "Repair recommended, with attention",
            Recommendation::LeanBuy => "Leaning toward buying new; weigh the risks",
            Recommendation::Buy => "Buy a new part",
        }
    }

    /// Get short recommendation label
    pub fn short_label(&self) -> &'static str {
        match self {
            Recommendation::StronglyRepair => "STRONG REPAIR",
            Recommendation::RepairWithCaution => "REPAIR",
            Recommendation::LeanBuy => "LEAN BUY",
            Recommendation::Buy => "BUY",
        }
    }

    /// Whether the tier favors repairing over buying new.
    pub fn favors_repair(&self) -> bool {
        matches!(
            self,
            Recommendation::StronglyRepair | Recommendation::RepairWithCaution
        )
    }
}
