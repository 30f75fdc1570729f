use thiserror::Error;

use crate::{Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No non-attacking mine placement exists for a {0}x{0} board")]
    PlacementInfeasible(Coord),
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
