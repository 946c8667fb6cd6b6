mod action;
mod builder;
mod error;
mod grid;
mod io;
mod mdp;
mod spec;
mod table;

pub use action::Action;
pub use builder::GridWorldBuilder;
pub use error::GridWorldError;
pub use grid::GridWorldMdp;
pub use io::{build_yaml, load_yaml, save_yaml};
pub use mdp::{DeterministicMdp, Mdp, TransitionFn};
pub use spec::{GridWorldSpec, RewardOverrideSpec};
pub use table::RewardTable;
