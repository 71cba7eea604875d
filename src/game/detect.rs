//! Win and draw detection over a [`Board`].

use super::board::{Board, COLS, ROWS, TOP_ROW};
use super::player::Player;

/// Tokens in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Horizontal, vertical, diagonal down-right, diagonal up-right as (row, col)
/// steps. Each axis is walked in both directions.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Does the token at (row, col) complete a line of [`WIN_LENGTH`] for `player`?
///
/// Any cell of the line may be the one passed in.
pub fn evaluate_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        let forward = run(board, row, col, dr, dc, player);
        let backward = run(board, row, col, -dr, -dc, player);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Every column is full.
pub fn evaluate_draw(board: &Board) -> bool {
    (0..COLS).all(|col| !board.get(TOP_ROW, col).is_empty())
}

/// Contiguous `player` tokens stepping away from (row, col), at most
/// `WIN_LENGTH - 1` steps, stopping at the board edge.
fn run(board: &Board, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
    let target = player.to_cell();
    (1..WIN_LENGTH as isize)
        .map_while(|step| {
            let r = row.checked_add_signed(dr * step).filter(|&r| r < ROWS)?;
            let c = col.checked_add_signed(dc * step).filter(|&c| c < COLS)?;
            (board.get(r, c) == target).then_some(())
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, player: Player) -> usize {
        let row = board.lowest_empty_row(col).unwrap();
        board.commit(row, col, player);
        row
    }

    /// Every cell of the line reports the win, not just the last one placed.
    fn assert_line(board: &Board, cells: &[(usize, usize)], player: Player) {
        for &(row, col) in cells {
            assert!(
                evaluate_win(board, row, col, player),
                "line not detected from ({row}, {col})"
            );
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 4..8 {
            drop(&mut board, col, Player::One);
        }
        assert_line(&board, &[(5, 4), (5, 5), (5, 6), (5, 7)], Player::One);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            drop(&mut board, 0, Player::One);
        }
        assert_line(&board, &[(5, 0), (4, 0), (3, 0), (2, 0)], Player::One);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // / shape rising to the right from (5, 0)
        drop(&mut board, 0, Player::Two);

        drop(&mut board, 1, Player::One);
        drop(&mut board, 1, Player::Two);

        drop(&mut board, 2, Player::One);
        drop(&mut board, 2, Player::One);
        drop(&mut board, 2, Player::Two);

        drop(&mut board, 3, Player::One);
        drop(&mut board, 3, Player::One);
        drop(&mut board, 3, Player::One);
        drop(&mut board, 3, Player::Two);

        assert_line(&board, &[(5, 0), (4, 1), (3, 2), (2, 3)], Player::Two);
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // \ shape falling to the right into (5, 7)
        drop(&mut board, 7, Player::One);

        drop(&mut board, 6, Player::Two);
        drop(&mut board, 6, Player::One);

        drop(&mut board, 5, Player::Two);
        drop(&mut board, 5, Player::Two);
        drop(&mut board, 5, Player::One);

        drop(&mut board, 4, Player::Two);
        drop(&mut board, 4, Player::Two);
        drop(&mut board, 4, Player::Two);
        drop(&mut board, 4, Player::One);

        assert_line(&board, &[(2, 4), (3, 5), (4, 6), (5, 7)], Player::One);
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut board = Board::new();
        for col in 0..3 {
            drop(&mut board, col, Player::One);
        }
        for col in 0..3 {
            assert!(!evaluate_win(&board, 5, col, Player::One));
        }
    }

    #[test]
    fn test_other_player_tokens_break_the_line() {
        let mut board = Board::new();
        drop(&mut board, 0, Player::One);
        drop(&mut board, 1, Player::One);
        drop(&mut board, 2, Player::Two);
        drop(&mut board, 3, Player::One);
        drop(&mut board, 4, Player::One);
        assert!(!evaluate_win(&board, 5, 3, Player::One));
    }

    #[test]
    fn test_wrong_player_is_not_a_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            drop(&mut board, 2, Player::One);
        }
        assert!(!evaluate_win(&board, 2, 2, Player::Two));
    }

    #[test]
    fn test_five_in_a_row_counts() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4] {
            drop(&mut board, col, Player::Two);
        }
        let row = drop(&mut board, 2, Player::Two);
        assert!(evaluate_win(&board, row, 2, Player::Two));
    }

    #[test]
    fn test_draw_requires_every_column_full() {
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for _ in 0..ROWS {
                drop(&mut board, col, Player::One);
            }
        }
        assert!(!evaluate_draw(&board));
        for _ in 0..ROWS {
            drop(&mut board, COLS - 1, Player::Two);
        }
        assert!(evaluate_draw(&board));
    }
}
