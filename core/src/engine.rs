use alloc::vec::Vec;

use crate::*;

/// Reveals the cell at `coords` and reports what happened.
///
/// Hitting a mine reveals only that mine. A safe cell with no adjacent mines opens its
/// connected zero region and the border of numbered cells around it. When no safe cell is
/// left hidden every mine is revealed and the outcome is [`RevealOutcome::Victory`].
///
/// Calling this on an already revealed cell changes nothing and reports the outcome the
/// current board state implies.
pub fn reveal(board: &mut Board, coords: Coord2) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if cell.is_mine {
        if !cell.revealed {
            board.cell_mut(coords).revealed = true;
            log::debug!("Hit mine at {:?}", coords);
        }
        return Ok(RevealOutcome::HitMine);
    }

    if !cell.revealed {
        board.cell_mut(coords).revealed = true;
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, cell.adjacent_count);

        if cell.adjacent_count == 0 {
            let opened = flood_reveal(board, coords);
            log::trace!("Flood from {:?} opened {} more cells", coords, opened);
        }
    }

    if is_cleared(board) {
        reveal_mines(board);
        log::debug!("Board cleared");
        Ok(RevealOutcome::Victory)
    } else {
        Ok(RevealOutcome::Cleared(cell.adjacent_count))
    }
}

/// Whether every non-mine cell has been revealed.
pub fn is_cleared(board: &Board) -> bool {
    board.iter_coords().all(|coords| !board[coords].is_pending())
}

/// Marks every mine as revealed.
pub fn reveal_mines(board: &mut Board) {
    let mines: Vec<Coord2> = board.mine_positions().collect();
    for coords in mines {
        board.cell_mut(coords).revealed = true;
    }
}

/// Depth-first fill from an already revealed zero cell, returns how many cells it opened.
///
/// Cells are marked revealed before they are pushed, so each one enters the stack once.
fn flood_reveal(board: &mut Board, start: Coord2) -> usize {
    let mut opened = 0;
    let mut to_visit = Vec::from([start]);

    while let Some(visit_coords) = to_visit.pop() {
        for pos in board.iter_neighbors(visit_coords) {
            let neighbor = board[pos];
            if !neighbor.is_pending() {
                continue;
            }

            board.cell_mut(pos).revealed = true;
            opened += 1;
            log::trace!("Flood opened {:?}, adjacent mines: {}", pos, neighbor.adjacent_count);

            if neighbor.adjacent_count == 0 {
                to_visit.push(pos);
            }
        }
    }

    opened
}
