//! # Wordgrid Engine
//!
//! Deterministic puzzle-validation and game-progression engine for a
//! handheld Wordle clone. The engine owns the rules; rendering, input
//! translation and asset loading live in the presentation shell and talk
//! to the engine through [`game::input::InputEvent`] and the tile grid.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      WORDGRID ENGINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── hash.rs     - djb2 word hash (32-bit, platform-stable)  │
//! │  └── rng.rs      - Xorshift32 PRNG with explicit state       │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── tile.rs     - Tile grid, letter cells, classifications  │
//! │  ├── input.rs    - Abstract input events                     │
//! │  ├── score.rs    - Guess scoring (exact/present/absent)      │
//! │  ├── events.rs   - Engine events for the presentation layer  │
//! │  └── session.rs  - Round/session state machine               │
//! │                                                              │
//! │  words/          - Wordlist repository                       │
//! │  ├── daily.rs    - Deterministic daily-puzzle index          │
//! │  └── data/       - Per-language static dictionaries          │
//! │                                                              │
//! │  save/           - Persistence (injected storage backend)    │
//! │  ├── record.rs   - Fixed-layout save records                 │
//! │  └── store.rs    - File / in-memory stores                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Everything under `core/`, `game/` and `words/` is **100% deterministic**:
//! all randomness comes from a seeded Xorshift32 whose state lives on the
//! session and round-trips through the save record, word hashing is a fixed
//! 32-bit djb2, and the daily-puzzle index is a pure function of Unix time.
//! Given the same seed and input events, two sessions evolve identically on
//! any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod save;
pub mod words;

// Re-export commonly used types
pub use crate::core::hash::word_hash;
pub use crate::core::rng::Xorshift32;
pub use game::events::GameEvent;
pub use game::input::InputEvent;
pub use game::score::score_guess;
pub use game::session::{DeletePolicy, GameMode, Phase, Session, SessionConfig};
pub use game::tile::{Tile, TileState};
pub use save::store::{FileStore, MemoryStore, SaveStore};
pub use words::{Language, Wordlist};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Letters per word (and per grid row).
pub const WORD_LEN: usize = 5;

/// Maximum attempts per round; attempt 6 means "round over".
pub const MAX_ATTEMPTS: u8 = 6;

/// Tiles in the grid (6 rows of 5).
pub const GRID_TILES: usize = WORD_LEN * MAX_ATTEMPTS as usize;
