use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for grid-world construction, validation, and YAML IO.
pub enum GridWorldError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("an MDP must declare at least one state")]
    EmptyStateSpace,

    #[error("an MDP must declare at least one action")]
    EmptyActionSpace,

    #[error(
        "reward table shape {states}x{actions} does not match declared {expected_states}x{expected_actions}"
    )]
    RewardShapeMismatch {
        expected_states: usize,
        expected_actions: usize,
        states: usize,
        actions: usize,
    },

    #[error("coordinate ({r}, {c}) is outside a {rows}x{cols} grid")]
    CoordinateOutOfBounds {
        r: usize,
        c: usize,
        rows: usize,
        cols: usize,
    },

    #[error("state {state} is outside the state range 0..{state_count}")]
    StateOutOfBounds { state: usize, state_count: usize },

    #[error("action index {action} is outside the action range 0..{action_count}")]
    ActionOutOfBounds { action: usize, action_count: usize },

    #[error("duplicate reward override for coordinate ({r}, {c})")]
    DuplicateRewardCoordinate { r: usize, c: usize },

    #[error("reward override at ({r}, {c}) must be finite, got {value}")]
    NonFiniteReward { r: usize, c: usize, value: f64 },

    #[error("default reward must be finite, got {value}")]
    NonFiniteDefaultReward { value: f64 },
}
