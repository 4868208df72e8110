//! Game Events
//!
//! The session pushes events as side effects of input handling; the
//! presentation layer drains them after each call and decides how to
//! animate, redraw, or play sounds. The engine itself never renders.

use serde::{Deserialize, Serialize};

use crate::words::Language;
use crate::WORD_LEN;

/// An observable state change produced while handling input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A full row was submitted but is not an allowed word; the row stays
    /// editable.
    GuessRejected {
        /// Attempt the rejected row belongs to.
        attempt: u8,
    },

    /// A row was accepted and scored.
    RowScored {
        /// Attempt that was scored.
        attempt: u8,
        /// Whether the row won the round.
        is_win: bool,
    },

    /// The round ended with a correct guess.
    RoundWon {
        /// Attempt the winning guess was made on, 0-based.
        attempt: u8,
    },

    /// The round ended with all attempts used.
    RoundLost {
        /// The answer, in the active language's encoding.
        answer: [u8; WORD_LEN],
    },

    /// A new daily round began because the daily index moved on.
    NewDailyStarted {
        /// Today's daily answer index.
        index: u32,
    },

    /// The session left the round and is back on the menu.
    ReturnedToMenu,

    /// The active language changed via the menu.
    LanguageChanged {
        /// The newly active language.
        language: Language,
    },

    /// The quit action was confirmed; the frontend should shut down.
    QuitRequested,
}
