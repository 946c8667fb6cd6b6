use std::collections::HashMap;

use crate::{GridWorldError, GridWorldMdp};

#[derive(Debug, Clone)]
/// Fluent builder for [`GridWorldMdp`].
pub struct GridWorldBuilder {
    rows: usize,
    cols: usize,
    overrides: HashMap<(usize, usize), f64>,
    goal: Option<usize>,
    default_reward: f64,
}

impl GridWorldBuilder {
    /// Start a builder for a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            overrides: HashMap::new(),
            goal: None,
            default_reward: 0.0,
        }
    }

    /// Grant `reward` for arriving at `(r, c)`. Later calls for the same
    /// coordinate replace earlier ones.
    pub fn reward_at(&mut self, r: usize, c: usize, reward: f64) -> &mut Self {
        self.overrides.insert((r, c), reward);
        self
    }

    /// Make `state` the goal at which absorbing is legal.
    pub fn goal(&mut self, state: usize) -> &mut Self {
        self.goal = Some(state);
        self
    }

    /// Set the reward granted where no override applies.
    pub fn default_reward(&mut self, value: f64) -> &mut Self {
        self.default_reward = value;
        self
    }

    /// Validate the configuration and materialize the grid world.
    pub fn build(&self) -> Result<GridWorldMdp, GridWorldError> {
        GridWorldMdp::new(
            self.rows,
            self.cols,
            &self.overrides,
            self.goal,
            self.default_reward,
        )
    }
}
