use crate::GridWorldError;

#[derive(Debug, Clone, PartialEq)]
/// Dense row-major reward table of shape `state_count x action_count`.
///
/// This is the authoritative reward surface consumed by solvers; reads go
/// straight to a flat `Vec` rather than through any recomputation.
pub struct RewardTable {
    state_count: usize,
    action_count: usize,
    values: Vec<f64>,
}

impl RewardTable {
    /// Allocate a table with every entry set to `value`.
    pub fn filled(
        state_count: usize,
        action_count: usize,
        value: f64,
    ) -> Result<Self, GridWorldError> {
        if state_count == 0 {
            return Err(GridWorldError::EmptyStateSpace);
        }
        if action_count == 0 {
            return Err(GridWorldError::EmptyActionSpace);
        }

        Ok(Self {
            state_count,
            action_count,
            values: vec![value; state_count * action_count],
        })
    }

    /// Number of states (table rows).
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Number of actions (table columns).
    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Look up the reward for taking `action` at `state`.
    pub fn get(&self, state: usize, action: usize) -> Option<f64> {
        if state >= self.state_count || action >= self.action_count {
            return None;
        }
        Some(self.values[state * self.action_count + action])
    }

    /// Overwrite one entry.
    pub fn set(&mut self, state: usize, action: usize, value: f64) -> Result<(), GridWorldError> {
        if state >= self.state_count {
            return Err(GridWorldError::StateOutOfBounds {
                state,
                state_count: self.state_count,
            });
        }
        if action >= self.action_count {
            return Err(GridWorldError::ActionOutOfBounds {
                action,
                action_count: self.action_count,
            });
        }

        self.values[state * self.action_count + action] = value;
        Ok(())
    }

    /// Overwrite one action column across every state.
    pub(crate) fn fill_action(&mut self, action: usize, value: f64) {
        for state in 0..self.state_count {
            self.values[state * self.action_count + action] = value;
        }
    }

    /// Raw row-major view of the table, for solvers that index directly.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
