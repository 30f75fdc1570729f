use crate::*;

/// Stores the adjacent mine count in every non-mine cell of `board`.
///
/// Counts depend only on the mine layout, so running this again leaves the board unchanged.
pub fn annotate(board: &mut Board) {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let coords = (row, col);
            if board.contains_mine(coords) {
                continue;
            }
            let count = board.adjacent_mine_count(coords);
            board.cell_mut(coords).adjacent_count = count;
        }
    }
    log::trace!("Annotated {}x{} board", size, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_neighborhood_on_classic_board() {
        let mut board = BacktrackingPlacer.place(8).unwrap();
        annotate(&mut board);

        for coords in board.iter_coords().filter(|&coords| !board.contains_mine(coords)) {
            let expected = board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_mine())
                .count() as u8;
            assert_eq!(board[coords].adjacent_count(), expected, "at {:?}", coords);
        }
    }

    #[test]
    fn known_counts_on_classic_board() {
        // mines in columns [0, 4, 7, 5, 2, 6, 1, 3]
        let mut board = BacktrackingPlacer.place(8).unwrap();
        annotate(&mut board);

        assert!(board[(0, 0)].is_mine());
        assert_eq!(board[(0, 1)].adjacent_count(), 1);
        assert_eq!(board[(0, 2)].adjacent_count(), 0);
        assert_eq!(board[(0, 7)].adjacent_count(), 0);
        assert_eq!(board[(7, 0)].adjacent_count(), 1);
        assert_eq!(board[(5, 5)].adjacent_count(), 1);
        assert_eq!(board[(6, 2)].adjacent_count(), 2);
    }

    #[test]
    fn mine_cells_keep_zero_count() {
        let mut board = Board::from_mine_coords(2, &[(0, 0), (1, 1)]).unwrap();
        annotate(&mut board);

        assert_eq!(board[(0, 0)].adjacent_count(), 0);
        assert_eq!(board[(0, 1)].adjacent_count(), 2);
        assert_eq!(board[(1, 0)].adjacent_count(), 2);
    }

    #[test]
    fn annotate_is_idempotent() {
        let mut board = BacktrackingPlacer.place(8).unwrap();
        annotate(&mut board);
        let first = board.clone();

        annotate(&mut board);

        assert_eq!(board, first);
    }

    #[test]
    fn corner_count_is_mines_among_three_neighbors() {
        let mut board = Board::from_mine_coords(8, &[(0, 1), (1, 1), (5, 5)]).unwrap();
        annotate(&mut board);

        assert_eq!(board[(0, 0)].adjacent_count(), 2);
        assert_eq!(board[(7, 7)].adjacent_count(), 0);
    }
}
