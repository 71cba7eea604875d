use std::fmt;
use std::str::FromStr;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Slot in per-player tables
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "one" | "1" | "p1" => Ok(Player::One),
            "two" | "2" | "p2" => Ok(Player::Two),
            other => Err(format!("unknown player '{other}' (expected 'one' or 'two')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_cells_are_distinct() {
        assert_eq!(Player::One.to_cell(), Cell::One);
        assert_eq!(Player::Two.to_cell(), Cell::Two);
        assert_ne!(Player::One.to_cell(), Player::Two.to_cell());
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("one".parse::<Player>(), Ok(Player::One));
        assert_eq!("P2".parse::<Player>(), Ok(Player::Two));
        assert!("three".parse::<Player>().is_err());
    }
}
