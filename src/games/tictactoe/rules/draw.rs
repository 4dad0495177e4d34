//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(board: &mut Board, cells: &[(Position, Player)]) {
        for (pos, player) in cells {
            board.set(*pos, Cell::Occupied(*player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::PlayerOne));
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{PlayerOne as O, PlayerTwo as X};
        // O X O / O X X / X O O
        let mut board = Board::new();
        fill(
            &mut board,
            &[
                (Position::TopLeft, O),
                (Position::TopCenter, X),
                (Position::TopRight, O),
                (Position::MiddleLeft, O),
                (Position::Center, X),
                (Position::MiddleRight, X),
                (Position::BottomLeft, X),
                (Position::BottomCenter, O),
                (Position::BottomRight, O),
            ],
        );
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::PlayerTwo));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
