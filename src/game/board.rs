use std::fmt;

use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 8;

/// Row index of the top of every column.
pub const TOP_ROW: usize = 0;
/// Row index where a token dropped into an empty column lands.
pub const BOTTOM_ROW: usize = ROWS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed 6x8 grid. Row 0 is the top, row 5 is the bottom.
///
/// Tokens are only ever written at the lowest empty row of a column, so a
/// column is always a contiguous stack growing up from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Check an externally supplied column index against the board width.
    pub fn validate_column(column: i32) -> Result<usize, MoveError> {
        usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn { column })
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Copy of the whole grid, top row first
    pub fn cells(&self) -> [[Cell; COLS]; ROWS] {
        self.cells
    }

    /// A column is full once its top row is occupied
    pub fn is_column_full(&self, col: usize) -> bool {
        debug_assert!(col < COLS, "column {col} out of range");
        !self.cells[TOP_ROW][col].is_empty()
    }

    /// Scan from the bottom row upward for the first empty cell.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        debug_assert!(col < COLS, "column {col} out of range");
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Write `player`'s token into (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied. Callers resolve `row` through
    /// [`Board::lowest_empty_row`], so an occupied target means the move
    /// sequencing is broken.
    pub fn commit(&mut self, row: usize, col: usize, player: Player) {
        assert!(
            self.cells[row][col].is_empty(),
            "commit to occupied cell ({row}, {col})"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of tokens on the board
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::One => 'X',
                    Cell::Two => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, player: Player) -> usize {
        let row = board.lowest_empty_row(col).unwrap();
        board.commit(row, col, player);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_tokens_stack_from_bottom() {
        let mut board = Board::new();

        assert_eq!(drop(&mut board, 3, Player::One), BOTTOM_ROW);
        assert_eq!(board.get(5, 3), Cell::One);

        assert_eq!(drop(&mut board, 3, Player::Two), 4);
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full_after_six_commits() {
        let mut board = Board::new();
        for col in 0..COLS {
            for n in 0..ROWS {
                assert!(!board.is_column_full(col), "col {col} full after {n}");
                drop(&mut board, col, Player::One);
            }
            assert!(board.is_column_full(col));
        }
    }

    #[test]
    fn test_lowest_empty_row_decreases_until_none() {
        let mut board = Board::new();
        let mut last = ROWS;
        while let Some(row) = board.lowest_empty_row(7) {
            assert!(row < last);
            assert!(!board.is_column_full(7));
            last = row;
            board.commit(row, 7, Player::Two);
        }
        assert_eq!(last, TOP_ROW);
        assert!(board.is_column_full(7));
        assert_eq!(board.lowest_empty_row(7), None);
    }

    #[test]
    #[should_panic(expected = "commit to occupied cell")]
    fn test_commit_to_occupied_cell_panics() {
        let mut board = Board::new();
        board.commit(5, 0, Player::One);
        board.commit(5, 0, Player::Two);
    }

    #[test]
    fn test_validate_column() {
        assert_eq!(Board::validate_column(0), Ok(0));
        assert_eq!(Board::validate_column(7), Ok(7));
        assert_eq!(
            Board::validate_column(8),
            Err(MoveError::InvalidColumn { column: 8 })
        );
        assert_eq!(
            Board::validate_column(-1),
            Err(MoveError::InvalidColumn { column: -1 })
        );
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            drop(&mut board, col, Player::One);
        }
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                drop(&mut board, col, Player::Two);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), ROWS * COLS);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        drop(&mut board, 0, Player::One);
        drop(&mut board, 7, Player::Two);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "........");
        assert_eq!(lines[5], "X......O");
    }
}
