#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(usize)]
/// The nine movement directives available at every grid state.
///
/// Reward tables are indexed positionally by these discriminants, so the
/// ordering is part of the public contract and must never change.
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    UpLeft = 4,
    UpRight = 5,
    DownLeft = 6,
    DownRight = 7,
    /// Stay in place. Legal (reward 0) only at the configured goal state.
    Absorb = 8,
}

impl Action {
    /// Size of the closed action set.
    pub const COUNT: usize = 9;

    /// Every action, in table index order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::UpLeft,
        Action::UpRight,
        Action::DownLeft,
        Action::DownRight,
        Action::Absorb,
    ];

    /// Return the stable reward-table index of this action.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw table index back into an action.
    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    /// The (row, col) displacement this action applies.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
            Action::UpLeft => (-1, -1),
            Action::UpRight => (-1, 1),
            Action::DownLeft => (1, -1),
            Action::DownRight => (1, 1),
            Action::Absorb => (0, 0),
        }
    }
}
