use serde::{Deserialize, Serialize};

/// One board cell: mine flag, neighbor count and reveal state.
///
/// `adjacent_count` is only meaningful for cells without a mine, mine cells keep `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) adjacent_count: u8,
    pub(crate) revealed: bool,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_count(self) -> u8 {
        self.adjacent_count
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Hidden and safe, i.e. still needed for a win.
    pub const fn is_pending(self) -> bool {
        !self.is_mine && !self.revealed
    }
}
