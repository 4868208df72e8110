//! Tile Grid
//!
//! One tile per letter cell: 6 rows of 5, 30 tiles total. In menu mode the
//! grid is reused; rows 1 and 2 hold the logo/title spelling and the last
//! row's five slots double as the five menu actions.

use serde::{Deserialize, Serialize};

use crate::{GRID_TILES, WORD_LEN};

/// Reserved letter values that are not code points from the alphabet.
///
/// These land in the persisted tile grid, so the numbering is part of the
/// save format.
pub mod letter {
    /// Empty cell.
    pub const EMPTY: u8 = 0x00;
    /// "New game" menu icon.
    pub const ICON_NEW_GAME: u8 = 0x01;
    /// "Load game" menu icon.
    pub const ICON_LOAD_GAME: u8 = 0x02;
    /// Daily/endless mode-select menu icon.
    pub const ICON_GAME_MODE: u8 = 0x03;
    /// Language-select menu icon.
    pub const ICON_LANGUAGE: u8 = 0x04;
    /// Quit menu icon.
    pub const ICON_QUIT: u8 = 0x05;
    /// Flag icon shown once a language was picked.
    pub const ICON_FLAG: u8 = 0x06;
    /// Hyphen, injectable via the special-character key.
    pub const HYPHEN: u8 = 0x2d;
}

/// Per-letter classification produced by scoring a submitted row.
///
/// Discriminants are part of the save format; do not reorder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileState {
    /// Row not submitted yet; classification is meaningless.
    #[default]
    Unresolved = 0,
    /// Letter is in the answer at this position.
    Correct = 1,
    /// Letter is not in the answer.
    Absent = 2,
    /// Letter is in the answer, but at another position.
    Present = 3,
}

/// One letter cell of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Code point from the active alphabet, or one of the [`letter`]
    /// sentinels.
    pub letter: u8,

    /// Unused; retained only so the save record keeps its layout.
    pub legacy_index: u32,

    /// Classification once the owning row has been submitted.
    pub state: TileState,
}

/// A fresh all-empty grid.
#[must_use]
pub fn empty_grid() -> [Tile; GRID_TILES] {
    [Tile::default(); GRID_TILES]
}

/// First and last tile index of the row owned by `attempt` (0..=5).
#[must_use]
pub fn row_bounds(attempt: u8) -> (i32, i32) {
    let attempt = attempt.min(5) as i32;
    let first = attempt * WORD_LEN as i32;
    (first, first + WORD_LEN as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_bounds_cover_grid() {
        assert_eq!(row_bounds(0), (0, 4));
        assert_eq!(row_bounds(3), (15, 19));
        assert_eq!(row_bounds(5), (25, 29));
        // Out-of-range attempts clamp to the last row
        assert_eq!(row_bounds(6), (25, 29));
    }

    #[test]
    fn default_tile_is_empty_unresolved() {
        let tile = Tile::default();
        assert_eq!(tile.letter, letter::EMPTY);
        assert_eq!(tile.state, TileState::Unresolved);
    }
}
