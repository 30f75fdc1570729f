use alloc::vec::Vec;

use crate::*;
pub use shuffled::*;

mod shuffled;

/// Produces a board with one mine per row and column and no two mines on a diagonal.
pub trait MinePlacer {
    fn place(self, size: Coord) -> Result<Board>;
}

/// Deterministic placement: the first solution found trying columns left to right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BacktrackingPlacer;

impl MinePlacer for BacktrackingPlacer {
    fn place(self, size: Coord) -> Result<Board> {
        let column_orders = (0..size).map(|_| (0..size).collect()).collect();
        place_with_orders(size, column_orders)
    }
}

/// Runs the row-by-row search, row `r` trying columns in `column_orders[r]`.
pub(crate) fn place_with_orders(size: Coord, column_orders: Vec<Vec<Coord>>) -> Result<Board> {
    let mut search = QueenSearch::new(size, column_orders);

    if size == 0 || !search.solve(0) {
        log::warn!("No non-attacking placement for a {}x{} board", size, size);
        return Err(GameError::PlacementInfeasible(size));
    }

    let mines: Vec<Coord2> = (0..size).zip(search.placed.iter().copied()).collect();
    log::debug!("Placed {} mines on a {}x{} board: {:?}", mines.len(), size, size, mines);
    Board::from_mine_coords(size, &mines)
}

struct QueenSearch {
    size: Coord,
    column_orders: Vec<Vec<Coord>>,
    columns: Vec<bool>,
    /// Indexed by `row - col + size - 1`.
    falling: Vec<bool>,
    /// Indexed by `row + col`.
    rising: Vec<bool>,
    /// Column of the mine in each filled row.
    placed: Vec<Coord>,
}

impl QueenSearch {
    fn new(size: Coord, column_orders: Vec<Vec<Coord>>) -> Self {
        let side = usize::from(size);
        let diagonals = (2 * side).saturating_sub(1);
        Self {
            size,
            column_orders,
            columns: alloc::vec![false; side],
            falling: alloc::vec![false; diagonals],
            rising: alloc::vec![false; diagonals],
            placed: Vec::with_capacity(side),
        }
    }

    fn solve(&mut self, row: Coord) -> bool {
        if row == self.size {
            return true;
        }

        for index in 0..self.column_orders[usize::from(row)].len() {
            let col = self.column_orders[usize::from(row)][index];
            let (falling, rising) = self.diagonals(row, col);

            if self.columns[usize::from(col)] || self.falling[falling] || self.rising[rising] {
                continue;
            }

            self.mark(row, col, true);
            self.placed.push(col);

            if self.solve(row + 1) {
                return true;
            }

            log::trace!("Backtracking from ({}, {})", row, col);
            self.placed.pop();
            self.mark(row, col, false);
        }

        false
    }

    fn diagonals(&self, row: Coord, col: Coord) -> (usize, usize) {
        let (row, col) = (usize::from(row), usize::from(col));
        (row + usize::from(self.size) - 1 - col, row + col)
    }

    fn mark(&mut self, row: Coord, col: Coord, occupied: bool) {
        let (falling, rising) = self.diagonals(row, col);
        self.columns[usize::from(col)] = occupied;
        self.falling[falling] = occupied;
        self.rising[rising] = occupied;
    }
}
