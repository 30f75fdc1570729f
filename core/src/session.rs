use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from placement to a win or a loss.
///
/// The session owns its board. Frontends feed it clicks through [`GameSession::reveal`] and
/// read back cells or a [`BoardView`] after each call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    /// Classic game: deterministic backtracking placement on a `size` board.
    pub fn new(size: Coord) -> Result<Self> {
        Self::with_placer(BacktrackingPlacer, size)
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        match config.placement {
            PlacementStrategy::Backtracking => Self::with_placer(BacktrackingPlacer, config.size),
            PlacementStrategy::Shuffled { seed } => {
                Self::with_placer(ShuffledPlacer::new(seed), config.size)
            }
        }
    }

    pub fn with_placer(placer: impl MinePlacer, size: Coord) -> Result<Self> {
        let board = placer.place(size)?;
        Ok(Self::from_board(board))
    }

    /// Starts a session on an existing layout, annotating it first.
    pub fn from_board(mut board: Board) -> Self {
        annotate(&mut board);
        log::debug!(
            "New {}x{} game with {} mines",
            board.size(),
            board.size(),
            board.mine_count()
        );
        Self {
            board,
            status: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        self.board.cell((row, col))
    }

    pub fn mine_positions(&self) -> Vec<Coord2> {
        self.board.mine_positions().collect()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_session(self)
    }

    /// Handles one click. Returns `Ok(None)` when the game is already over.
    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<Option<RevealOutcome>> {
        let coords = self.board.validate_coords((row, col))?;

        if self.status.is_finished() {
            log::trace!("Ignoring click at {:?}, game is {:?}", coords, self.status);
            return Ok(None);
        }

        let outcome = crate::engine::reveal(&mut self.board, coords)?;
        match outcome {
            RevealOutcome::HitMine => {
                self.triggered_mine = Some(coords);
                self.status = GameStatus::Lost;
                log::debug!("Game lost at {:?}", coords);
            }
            RevealOutcome::Victory => {
                self.status = GameStatus::Won;
                log::debug!("Game won");
            }
            RevealOutcome::Cleared(_) => {}
        }

        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_annotated_and_in_progress() {
        let session = GameSession::new(8).unwrap();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.size(), 8);
        assert_eq!(session.mine_positions().len(), 8);
        assert_eq!(session.cell(0, 1).unwrap().adjacent_count(), 1);
        assert!(!session.cell(0, 1).unwrap().is_revealed());
    }

    #[test]
    fn new_game_fails_without_placement() {
        assert_eq!(
            GameSession::new(3),
            Err(GameError::PlacementInfeasible(3))
        );
    }

    #[test]
    fn new_game_accepts_four() {
        assert!(GameSession::new(4).is_ok());
    }

    #[test]
    fn hitting_mine_loses_and_ignores_later_clicks() {
        let mut session = GameSession::new(8).unwrap();

        assert_eq!(session.reveal(0, 0).unwrap(), Some(RevealOutcome::HitMine));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.triggered_mine(), Some((0, 0)));

        let before = session.clone();
        assert_eq!(session.reveal(0, 2).unwrap(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn clearing_all_safe_cells_wins() {
        let mut session = GameSession::new(8).unwrap();
        let safe: Vec<Coord2> = session
            .board()
            .iter_coords()
            .filter(|&coords| !session.board().contains_mine(coords))
            .collect();

        let mut last = None;
        for (row, col) in safe {
            if let Some(outcome) = session.reveal(row, col).unwrap() {
                last = Some(outcome);
            }
        }

        assert_eq!(last, Some(RevealOutcome::Victory));
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.triggered_mine(), None);
        assert_eq!(session.reveal(1, 4).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_is_reported_even_after_game_end() {
        let mut session = GameSession::new(8).unwrap();
        session.reveal(0, 0).unwrap();

        assert_eq!(
            session.reveal(0, 8),
            Err(GameError::OutOfBounds((0, 8)))
        );
        assert_eq!(session.cell(9, 9), Err(GameError::OutOfBounds((9, 9))));
    }

    #[test]
    fn config_selects_placement() {
        let classic = GameSession::from_config(GameConfig::default()).unwrap();
        assert_eq!(classic, GameSession::new(8).unwrap());

        let config = GameConfig::new(8, PlacementStrategy::Shuffled { seed: 9 });
        let shuffled = GameSession::from_config(config).unwrap();
        assert_eq!(
            shuffled.board(),
            GameSession::with_placer(ShuffledPlacer::new(9), 8)
                .unwrap()
                .board()
        );
    }

    #[test]
    fn from_board_annotates_layout() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();

        let session = GameSession::from_board(board);

        assert_eq!(session.cell(0, 0).unwrap().adjacent_count(), 1);
        assert!(session.cell(1, 1).unwrap().is_mine());
    }
}
