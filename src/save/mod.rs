//! Persistence
//!
//! Two independent save slots: the regular slot snapshots a regular or
//! endless round, the daily slot records today's daily round so it
//! survives restarts and cannot be replayed for a better score.
//!
//! Records are fixed-layout and serialized little-endian; the storage
//! backend behind them is injected so frontends and tests choose where
//! bytes actually live.

pub mod record;
pub mod store;

// Re-export key types
pub use record::{DailyRecord, RegularRecord, SaveError, SAVE_VERSION};
pub use store::{FileStore, MemoryStore, SaveSlot, SaveStore};
