use std::collections::HashMap;

use crate::{Action, DeterministicMdp, GridWorldError, Mdp, RewardTable, TransitionFn};

#[derive(Debug, Clone, PartialEq)]
/// Deterministic MDP over a rectangular grid.
///
/// States are grid cells under the row-major encoding `s = r * cols + c`.
/// An agent moves between adjacent/diagonal cells; moves that would leave
/// the grid keep the agent in place and cost `-inf`, and the `Absorb`
/// action costs 0 at the goal state and `-inf` everywhere else. All of
/// this is baked into a dense reward table at construction, so solvers
/// never branch on legality at query time.
pub struct GridWorldMdp {
    rows: usize,
    cols: usize,
    default_reward: f64,
    rewards: RewardTable,
    state_rewards: Vec<f64>,
    goal: Option<usize>,
}

impl GridWorldMdp {
    /// Build the grid world and eagerly materialize its reward table.
    ///
    /// `reward_overrides` maps a coordinate to the reward granted for
    /// *arriving* there; every other arrival grants `default_reward`.
    /// Illegal moves take precedence over overrides: an agent bouncing off
    /// a wall back onto an overridden cell still receives `-inf`.
    pub fn new(
        rows: usize,
        cols: usize,
        reward_overrides: &HashMap<(usize, usize), f64>,
        goal: Option<usize>,
        default_reward: f64,
    ) -> Result<Self, GridWorldError> {
        if rows == 0 || cols == 0 {
            return Err(GridWorldError::InvalidDimensions { rows, cols });
        }
        for &(r, c) in reward_overrides.keys() {
            if r >= rows || c >= cols {
                return Err(GridWorldError::CoordinateOutOfBounds { r, c, rows, cols });
            }
        }

        let state_count = rows * cols;
        let mut rewards = RewardTable::filled(state_count, Action::COUNT, default_reward)?;

        for state in 0..state_count {
            for action in Action::ALL {
                let (next, illegal) = step_in_grid(rows, cols, state, action);
                if illegal {
                    rewards.set(state, action.index(), f64::NEG_INFINITY)?;
                } else if let Some(&value) = reward_overrides.get(&(next / cols, next % cols)) {
                    rewards.set(state, action.index(), value)?;
                }
            }
        }

        let mut state_rewards = vec![default_reward; state_count];
        for (&(r, c), &value) in reward_overrides {
            state_rewards[r * cols + c] = value;
        }

        let mut mdp = Self {
            rows,
            cols,
            default_reward,
            rewards,
            state_rewards,
            goal: None,
        };
        mdp.set_goal(goal)?;
        Ok(mdp)
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The state at which `Absorb` is currently legal, if any.
    pub fn goal(&self) -> Option<usize> {
        self.goal
    }

    /// The reward granted when no override applies.
    pub fn default_reward(&self) -> f64 {
        self.default_reward
    }

    /// Borrow the authoritative reward table.
    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Per-state arrival rewards. A convenience cache; the per-(state,
    /// action) table is authoritative.
    pub fn state_rewards(&self) -> &[f64] {
        &self.state_rewards
    }

    /// Encode a coordinate as a state index.
    pub fn coor_to_state(&self, r: usize, c: usize) -> Result<usize, GridWorldError> {
        if r >= self.rows || c >= self.cols {
            return Err(GridWorldError::CoordinateOutOfBounds {
                r,
                c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(r * self.cols + c)
    }

    /// Decode a state index back into its (row, col) coordinate.
    pub fn state_to_coor(&self, state: usize) -> Result<(usize, usize), GridWorldError> {
        if state >= self.state_count() {
            return Err(GridWorldError::StateOutOfBounds {
                state,
                state_count: self.state_count(),
            });
        }
        Ok((state / self.cols, state % self.cols))
    }

    /// Apply `action` at `state`, reporting whether the move was illegal.
    ///
    /// Pure and side-effect-free. An illegal move keeps the agent at
    /// `state` with the flag set; it is a domain outcome, not an error.
    pub fn step(&self, state: usize, action: Action) -> Result<(usize, bool), GridWorldError> {
        if state >= self.state_count() {
            return Err(GridWorldError::StateOutOfBounds {
                state,
                state_count: self.state_count(),
            });
        }
        Ok(step_in_grid(self.rows, self.cols, state, action))
    }

    /// Reconfigure the goal: fill the `Absorb` column with `-inf`, then set
    /// it to 0 at `goal` when one is given. Overrides any previous goal and
    /// touches no other column. Idempotent.
    pub fn set_goal(&mut self, goal: Option<usize>) -> Result<(), GridWorldError> {
        if let Some(state) = goal {
            if state >= self.state_count() {
                return Err(GridWorldError::StateOutOfBounds {
                    state,
                    state_count: self.state_count(),
                });
            }
        }

        self.rewards.fill_action(Action::Absorb.index(), f64::NEG_INFINITY);
        if let Some(state) = goal {
            self.rewards.set(state, Action::Absorb.index(), 0.0)?;
        }
        self.goal = goal;
        Ok(())
    }

    /// Make `Absorb` legal and free at every state, for formulations where
    /// any cell may terminate an episode. Clears the stored goal.
    pub fn set_all_goals(&mut self) {
        self.rewards.fill_action(Action::Absorb.index(), 0.0);
        self.goal = None;
    }

    /// Repackage this grid world as a passive [`Mdp`] record. The returned
    /// record owns a copy of the reward table and a transition closure over
    /// the grid dimensions.
    pub fn to_mdp(&self) -> Result<Mdp, GridWorldError> {
        let (rows, cols) = (self.rows, self.cols);
        let transition: TransitionFn = Box::new(move |state, action| {
            let action = checked_action(action);
            assert!(state < rows * cols, "state {state} out of range");
            step_in_grid(rows, cols, state, action).0
        });

        Mdp::new(
            self.state_count(),
            Action::COUNT,
            self.rewards.clone(),
            transition,
        )
    }
}

impl DeterministicMdp for GridWorldMdp {
    fn state_count(&self) -> usize {
        self.rows * self.cols
    }

    fn action_count(&self) -> usize {
        Action::COUNT
    }

    fn reward(&self, state: usize, action: usize) -> Option<f64> {
        self.rewards.get(state, action)
    }

    fn transition(&self, state: usize, action: usize) -> usize {
        let action = checked_action(action);
        assert!(
            state < self.state_count(),
            "state {state} out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        step_in_grid(self.rows, self.cols, state, action).0
    }
}

/// Fail-fast conversion for the raw-index transition surface. An index
/// outside the closed action set is a caller bug, not a domain outcome.
fn checked_action(action: usize) -> Action {
    match Action::from_index(action) {
        Some(action) => action,
        None => panic!("undefined action {action}"),
    }
}

/// Apply an action's delta inside a `rows x cols` grid. Out-of-bounds
/// destinations revert to the origin and flag the move illegal.
fn step_in_grid(rows: usize, cols: usize, state: usize, action: Action) -> (usize, bool) {
    let (r, c) = (state / cols, state % cols);
    let (dr, dc) = action.delta();
    let r_next = r as isize + dr;
    let c_next = c as isize + dc;

    if r_next < 0 || r_next >= rows as isize || c_next < 0 || c_next >= cols as isize {
        return (state, true);
    }

    ((r_next as usize) * cols + c_next as usize, false)
}
