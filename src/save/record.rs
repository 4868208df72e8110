//! Save Records
//!
//! Fixed-layout snapshots of a round, serialized little-endian with fixed
//! field widths. The regular record carries a version number; the daily
//! record is instead validated by matching its daily index against today,
//! which also makes yesterday's record invalid by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::tile::Tile;
use crate::words::Language;
use crate::GRID_TILES;

/// Current regular-record version. Bump when the layout changes; older
/// records are refused rather than misread.
pub const SAVE_VERSION: u32 = 4;

/// Errors from encoding, decoding or storing a record.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Storage backend failure.
    #[error("save storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Record bytes did not parse.
    #[error("save record corrupt: {0}")]
    Codec(#[from] bincode::Error),

    /// Record was written by an incompatible version.
    #[error("save record version {found} not supported (expected {SAVE_VERSION})")]
    VersionMismatch {
        /// Version number found in the record.
        found: u32,
    },
}

/// Snapshot of a regular or endless round, in progress or finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularRecord {
    /// Layout version, always [`SAVE_VERSION`] when written.
    pub version: u32,
    /// The full tile grid.
    pub tiles: [Tile; GRID_TILES],
    /// Cursor position at save time.
    pub cursor: i32,
    /// Last committed letter.
    pub previous_letter: u8,
    /// Index of the answer in the language's answer table.
    pub answer_index: u32,
    /// Current attempt, 0-based.
    pub attempt: u8,
    /// RNG state word at save time.
    pub seed: u32,
    /// Language the round was played in.
    pub language: Language,
}

impl RegularRecord {
    /// Serialize to the on-disk byte layout.
    pub fn encode(&self) -> Result<Vec<u8>, SaveError> {
        Ok(bincode::serialize(self)?)
    }

    /// Parse a record, refusing unknown versions.
    pub fn decode(bytes: &[u8]) -> Result<Self, SaveError> {
        let record: Self = bincode::deserialize(bytes)?;
        if record.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                found: record.version,
            });
        }
        Ok(record)
    }
}

/// Snapshot of today's daily round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The full tile grid.
    pub tiles: [Tile; GRID_TILES],
    /// Cursor position at save time.
    pub cursor: i32,
    /// Last committed letter.
    pub previous_letter: u8,
    /// Daily index the record belongs to. A mismatch with today's index
    /// invalidates the whole record.
    pub answer_index: u32,
    /// Current attempt, 0-based.
    pub attempt: u8,
    /// Whether the round finished.
    pub has_ended: bool,
    /// 1-based attempt the round ended on; meaningless unless
    /// `has_ended`.
    pub final_attempt: u8,
}

impl DailyRecord {
    /// Serialize to the on-disk byte layout.
    pub fn encode(&self) -> Result<Vec<u8>, SaveError> {
        Ok(bincode::serialize(self)?)
    }

    /// Parse a record. Index validation against today is the caller's
    /// job; only structural errors are reported here.
    pub fn decode(bytes: &[u8]) -> Result<Self, SaveError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::{empty_grid, letter, TileState};

    fn sample_regular() -> RegularRecord {
        let mut tiles = empty_grid();
        tiles[0].letter = b'W';
        tiles[0].state = TileState::Correct;
        tiles[29].letter = letter::ICON_QUIT;
        RegularRecord {
            version: SAVE_VERSION,
            tiles,
            cursor: 7,
            previous_letter: b'W',
            answer_index: 42,
            attempt: 1,
            seed: 0xdead_beef,
            language: Language::German,
        }
    }

    #[test]
    fn regular_round_trip() {
        let record = sample_regular();
        let bytes = record.encode().unwrap();
        let decoded = RegularRecord::decode(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn wrong_version_is_refused() {
        let mut record = sample_regular();
        record.version = 3;
        let bytes = record.encode().unwrap();
        match RegularRecord::decode(&bytes) {
            Err(SaveError::VersionMismatch { found: 3 }) => {}
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn truncated_bytes_are_refused() {
        let bytes = sample_regular().encode().unwrap();
        assert!(matches!(
            RegularRecord::decode(&bytes[..bytes.len() / 2]),
            Err(SaveError::Codec(_))
        ));
    }

    #[test]
    fn daily_round_trip() {
        let record = DailyRecord {
            tiles: empty_grid(),
            cursor: 14,
            previous_letter: 0,
            answer_index: 812,
            attempt: 2,
            has_ended: true,
            final_attempt: 3,
        };
        let bytes = record.encode().unwrap();
        assert_eq!(DailyRecord::decode(&bytes).unwrap(), record);
    }
}
