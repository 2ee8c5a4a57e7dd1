//! Type-safe criterion point scale.
//!
//! Every criterion in the decision matrix scores on the same 1-5 scale,
//! and the final score is a convex combination of criterion points. The
//! newtype encodes the scale so out-of-range values cannot leak into the
//! weighted sum.

use serde::{Deserialize, Serialize};

/// Criterion points on the 1-5 scale.
///
/// Values are clamped to the [1, 5] range on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Points(u8);

impl Points {
    /// Create criterion points, clamping to [1, 5].
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Get the raw point value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Point value as a float, for the weighted combination.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
