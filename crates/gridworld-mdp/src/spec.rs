use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{GridWorldError, GridWorldMdp};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable grid-world schema used for YAML IO and validation.
pub struct GridWorldSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Sparse arrival-reward overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<RewardOverrideSpec>,
    /// State at which the absorb action is legal, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<usize>,
    /// Reward granted where no override applies (defaults to 0).
    #[serde(default)]
    pub default_reward: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One arrival-reward override at a grid coordinate.
pub struct RewardOverrideSpec {
    pub r: usize,
    pub c: usize,
    pub reward: f64,
}

impl GridWorldSpec {
    /// Validate dimensions, override coordinates, reward values, and goal.
    pub fn validate(&self) -> Result<(), GridWorldError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridWorldError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if !self.default_reward.is_finite() {
            return Err(GridWorldError::NonFiniteDefaultReward {
                value: self.default_reward,
            });
        }

        let mut seen = HashSet::with_capacity(self.rewards.len());
        for entry in &self.rewards {
            if entry.r >= self.rows || entry.c >= self.cols {
                return Err(GridWorldError::CoordinateOutOfBounds {
                    r: entry.r,
                    c: entry.c,
                    rows: self.rows,
                    cols: self.cols,
                });
            }

            // Negative infinity is reserved for encoding illegal moves, so
            // overrides must be finite or the table becomes ambiguous.
            if !entry.reward.is_finite() {
                return Err(GridWorldError::NonFiniteReward {
                    r: entry.r,
                    c: entry.c,
                    value: entry.reward,
                });
            }

            if !seen.insert((entry.r, entry.c)) {
                return Err(GridWorldError::DuplicateRewardCoordinate {
                    r: entry.r,
                    c: entry.c,
                });
            }
        }

        if let Some(goal) = self.goal {
            let state_count = self.rows * self.cols;
            if goal >= state_count {
                return Err(GridWorldError::StateOutOfBounds {
                    state: goal,
                    state_count,
                });
            }
        }

        Ok(())
    }

    /// Validate this spec and build the grid world it describes.
    pub fn build(&self) -> Result<GridWorldMdp, GridWorldError> {
        self.validate()?;

        let overrides: HashMap<(usize, usize), f64> = self
            .rewards
            .iter()
            .map(|entry| ((entry.r, entry.c), entry.reward))
            .collect();

        GridWorldMdp::new(
            self.rows,
            self.cols,
            &overrides,
            self.goal,
            self.default_reward,
        )
    }
}
