use serde::{Deserialize, Serialize};

/// Character marking a traversable cell in map files.
pub const OPEN_CHAR: char = '.';

/// Character marking a blocked cell in map files.
pub const BLOCKED_CHAR: char = '@';

/// State of a single map cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Open,
    Blocked,
}

impl Tile {
    /// Maps a file character to a tile. `'.'` is open, every other
    /// character counts as blocked.
    pub fn from_char(ch: char) -> Self {
        if ch == OPEN_CHAR { Tile::Open } else { Tile::Blocked }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Open => OPEN_CHAR,
            Tile::Blocked => BLOCKED_CHAR,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Tile::Open => Tile::Blocked,
            Tile::Blocked => Tile::Open,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Tile::Blocked)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Tile::Open, Tile::from_char('.'));
        assert_eq!(Tile::Blocked, Tile::from_char('@'));
        // unknown chars count as blocked
        assert_eq!(Tile::Blocked, Tile::from_char('T'));
        assert_eq!(Tile::Blocked, Tile::from_char(' '));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Tile::Blocked, Tile::Open.toggled());
        assert_eq!(Tile::Open, Tile::Blocked.toggled());
    }
}
