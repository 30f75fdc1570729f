#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use annotate::*;
pub use engine::*;
pub use error::*;
pub use placer::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod annotate;
mod engine;
mod error;
mod placer;
mod session;
mod tile;
mod types;
mod view;

/// Side length of the classic board.
pub const DEFAULT_SIZE: Coord = 8;

/// How the mine layout of a new session is chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// First solution of a left-to-right backtracking search.
    #[default]
    Backtracking,
    /// Same search, with each row's column order shuffled from `seed`.
    Shuffled { seed: u64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub placement: PlacementStrategy,
}

impl GameConfig {
    pub const fn new(size: Coord, placement: PlacementStrategy) -> Self {
        Self { size, placement }
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, PlacementStrategy::Backtracking)
    }
}

/// Square grid of cells, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// A board of the given side length without mines.
    pub fn empty(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Builds an unannotated board with mines at `mine_coords`.
    ///
    /// The layout is taken as given, it does not have to be non-attacking.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.cell_mut(coords).is_mine = true;
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord {
        // always built from a `Coord` side length
        self.cells.nrows() as Coord
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_positions().count() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.revealed).count() as CellCount
    }

    /// Mine coordinates in row-major order.
    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_coords().filter(|&coords| self[coords].is_mine)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine
    }

    /// Mines among the edge-clipped 8-neighborhood, computed from the layout alone.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Result of revealing a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    HitMine,
    /// Safe cell revealed, carrying the clicked cell's own adjacent count.
    Cleared(u8),
    Victory,
}

impl RevealOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Victory)
    }
}
