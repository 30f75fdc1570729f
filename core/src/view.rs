use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a frontend should draw for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    #[default]
    Hidden,
    Revealed(u8),
    Mine,
    /// The mine that ended the game.
    Exploded,
}

/// Read-only snapshot of a session for rendering.
///
/// Mines stay hidden while the game is in progress. Once it is over all of them are shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub status: GameStatus,
    pub cells: Array2<ViewCell>,
}

impl BoardView {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let status = session.status();
        let size = board.size();
        let mut cells = Array2::default((size, size).to_nd_index());

        for coords in board.iter_coords() {
            let cell = board[coords];
            cells[coords.to_nd_index()] = if cell.is_mine() {
                if session.triggered_mine() == Some(coords) {
                    ViewCell::Exploded
                } else if cell.is_revealed() || status.is_finished() {
                    ViewCell::Mine
                } else {
                    ViewCell::Hidden
                }
            } else if cell.is_revealed() {
                ViewCell::Revealed(cell.adjacent_count())
            } else {
                ViewCell::Hidden
            };
        }

        Self {
            size,
            status,
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> ViewCell {
        self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_view_hides_mines() {
        let mut session = GameSession::new(8).unwrap();
        session.reveal(0, 1).unwrap();

        let view = session.view();

        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.cell_at((0, 1)), ViewCell::Revealed(1));
        assert_eq!(view.cell_at((0, 0)), ViewCell::Hidden);
        assert_eq!(view.cell_at((7, 7)), ViewCell::Hidden);
    }

    #[test]
    fn lost_view_shows_every_mine() {
        let mut session = GameSession::new(8).unwrap();
        session.reveal(1, 4).unwrap();

        let view = session.view();

        assert_eq!(view.status, GameStatus::Lost);
        assert_eq!(view.cell_at((1, 4)), ViewCell::Exploded);
        for coords in session.mine_positions().into_iter().filter(|&c| c != (1, 4)) {
            assert_eq!(view.cell_at(coords), ViewCell::Mine);
        }
        assert_eq!(view.cell_at((0, 1)), ViewCell::Hidden);
        // the engine itself only revealed the triggered mine
        assert_eq!(session.board().revealed_count(), 1);
    }

    #[test]
    fn won_view_shows_mines_without_explosion() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut session = GameSession::from_board(board);
        for (row, col) in [(0, 1), (1, 0), (1, 1)] {
            session.reveal(row, col).unwrap();
        }

        let view = session.view();

        assert_eq!(view.status, GameStatus::Won);
        assert_eq!(view.cell_at((0, 0)), ViewCell::Mine);
        assert_eq!(view.cell_at((1, 1)), ViewCell::Revealed(1));
    }

    #[test]
    fn view_serializes_status_and_cells() {
        let mut session = GameSession::new(4).unwrap();
        session.reveal(0, 0).unwrap();

        let json = serde_json::to_value(session.view()).unwrap();

        assert_eq!(json["size"], 4);
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["cells"]["data"][0]["Revealed"], 1);
    }
}
