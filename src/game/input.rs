//! Input Events
//!
//! The engine never reads hardware. The presentation layer translates keys
//! into these events and feeds them to the session, which keeps the engine
//! testable and portable across frontends.

use serde::{Deserialize, Serialize};

/// One abstract input event.
///
/// The numeric-keypad model drives letter entry: digit keys 2..=9 each own
/// a group of letters, repeated presses cycle within the group, and a
/// separate event commits the cell and advances the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Digit key 2..=9 pressed; cycle through that key's letter group.
    LetterGroup(u8),
    /// Cycle through the language's special characters (umlauts, hyphen).
    SpecialChar,
    /// Step the current cell forward through the whole alphabet.
    NextLetter,
    /// Step the current cell backward through the whole alphabet.
    PrevLetter,
    /// Direct character entry from a full keyboard.
    TextInput(char),
    /// Commit the current cell and advance, or submit a full row, or
    /// activate the selected menu action.
    Confirm,
    /// Clear the current cell and step back.
    Delete,
    /// Move menu selection to the next action.
    MenuNext,
    /// Move menu selection to the previous action.
    MenuPrev,
    /// Switch between the daily and endless game modes.
    ToggleMode,
    /// Return to the menu from an active round.
    Back,
    /// Shut the game down, saving a round in progress.
    Quit,
}
