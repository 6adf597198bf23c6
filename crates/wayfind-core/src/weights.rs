//! Weight policies for freshly built grids.

use rand::Rng;

use crate::error::GridError;

/// How a new grid assigns entry costs to its cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Weights {
    /// Every cell costs the same.
    Uniform(i32),
    /// Uniformly random in `min..=max`.
    Random { min: i32, max: i32 },
}

impl Default for Weights {
    fn default() -> Self {
        Self::Random { min: 1, max: 10 }
    }
}

impl Weights {
    /// Check that every weight this policy can produce is positive.
    pub fn validate(self) -> Result<(), GridError> {
        let (min, max) = match self {
            Self::Uniform(w) => (w, w),
            Self::Random { min, max } => (min, max),
        };
        if min <= 0 || min > max {
            return Err(GridError::InvalidWeights { min, max });
        }
        Ok(())
    }

    /// Draw one weight. The policy must have passed [`validate`](Self::validate).
    pub fn sample(self, rng: &mut impl Rng) -> i32 {
        match self {
            Self::Uniform(w) => w,
            Self::Random { min, max } => rng.random_range(min..=max),
        }
    }
}
