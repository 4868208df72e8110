//! Game Logic Module
//!
//! Everything that decides the outcome of a round. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `tile`: tile grid, letter cells, classifications
//! - `input`: abstract input events from the presentation layer
//! - `score`: letter-by-letter guess scoring
//! - `events`: engine events consumed by the presentation layer
//! - `session`: the round/session state machine

pub mod events;
pub mod input;
pub mod score;
pub mod session;
pub mod tile;

// Re-export key types
pub use events::GameEvent;
pub use input::InputEvent;
pub use score::score_guess;
pub use session::{DeletePolicy, GameMode, Phase, Session, SessionConfig};
pub use tile::{Tile, TileState};
