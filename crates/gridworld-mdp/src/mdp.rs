use std::fmt;

use crate::{GridWorldError, RewardTable};

/// Contract implemented by every deterministic MDP in this crate.
///
/// Rewards live in a dense table and transitions are a total pure function,
/// so a solver can sweep all `(state, action)` pairs without touching any
/// environment machinery.
pub trait DeterministicMdp {
    /// Return the number of states.
    fn state_count(&self) -> usize;

    /// Return the number of actions.
    fn action_count(&self) -> usize;

    /// Reward received for taking `action` at `state`.
    fn reward(&self, state: usize, action: usize) -> Option<f64>;

    /// The state that results from taking `action` at `state`.
    ///
    /// Total over `0..state_count` x `0..action_count`. Calling it outside
    /// that range is a caller bug and panics rather than returning an error.
    fn transition(&self, state: usize, action: usize) -> usize;
}

/// Boxed total transition function `(state, action) -> state`.
pub type TransitionFn = Box<dyn Fn(usize, usize) -> usize>;

/// Passive deterministic-MDP record: a validated reward table bundled with
/// a transition function. Constructed once, never mutated; solvers read the
/// table and call [`DeterministicMdp::transition`] directly.
pub struct Mdp {
    state_count: usize,
    action_count: usize,
    rewards: RewardTable,
    transition: TransitionFn,
}

impl Mdp {
    /// Bundle a reward table and transition function after checking that
    /// counts are positive and the table shape matches them exactly.
    pub fn new(
        state_count: usize,
        action_count: usize,
        rewards: RewardTable,
        transition: TransitionFn,
    ) -> Result<Self, GridWorldError> {
        if state_count == 0 {
            return Err(GridWorldError::EmptyStateSpace);
        }
        if action_count == 0 {
            return Err(GridWorldError::EmptyActionSpace);
        }
        if rewards.state_count() != state_count || rewards.action_count() != action_count {
            return Err(GridWorldError::RewardShapeMismatch {
                expected_states: state_count,
                expected_actions: action_count,
                states: rewards.state_count(),
                actions: rewards.action_count(),
            });
        }

        Ok(Self {
            state_count,
            action_count,
            rewards,
            transition,
        })
    }

    /// Borrow the reward table.
    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }
}

impl DeterministicMdp for Mdp {
    fn state_count(&self) -> usize {
        self.state_count
    }

    fn action_count(&self) -> usize {
        self.action_count
    }

    fn reward(&self, state: usize, action: usize) -> Option<f64> {
        self.rewards.get(state, action)
    }

    fn transition(&self, state: usize, action: usize) -> usize {
        (self.transition)(state, action)
    }
}

impl fmt::Debug for Mdp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mdp")
            .field("state_count", &self.state_count)
            .field("action_count", &self.action_count)
            .finish_non_exhaustive()
    }
}
