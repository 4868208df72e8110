//! Guess Scoring
//!
//! Classifies a submitted row against the answer in three passes over a
//! working copy of the answer:
//!
//! 1. Exact matches are marked `Correct` and consumed from the copy.
//! 2. Remaining letters found anywhere in the copy are marked `Present`.
//! 3. Everything else is marked `Absent`.
//!
//! The present pass does NOT consume letters from the working copy. A guess
//! that repeats a letter can therefore mark it `Present` more times than it
//! occurs in the answer. Long-standing behavior; existing players read the
//! board this way, so keep it.
//!
//! The win check compares whole-word hashes rather than the five per-letter
//! marks.

use crate::core::word_hash;
use crate::game::tile::TileState;
use crate::WORD_LEN;

/// Consumed sentinel in the working copy; never a valid letter.
const CONSUMED: u8 = 0x00;

/// Score one submitted guess against the answer.
///
/// Returns the per-letter classification and whether the guess wins the
/// round.
#[must_use]
pub fn score_guess(
    guess: &[u8; WORD_LEN],
    answer: &[u8; WORD_LEN],
) -> ([TileState; WORD_LEN], bool) {
    let mut states = [TileState::Unresolved; WORD_LEN];
    let mut working = *answer;

    // Pass 1: exact positional matches, consumed so a later present pass
    // cannot reuse them.
    for i in 0..WORD_LEN {
        if guess[i] == working[i] {
            states[i] = TileState::Correct;
            working[i] = CONSUMED;
        }
    }

    // Pass 2: misplaced letters. Letters found here are intentionally not
    // consumed from the working copy.
    for i in 0..WORD_LEN {
        if states[i] == TileState::Correct {
            continue;
        }
        if working.contains(&guess[i]) {
            states[i] = TileState::Present;
        }
    }

    // Pass 3: everything still unresolved is absent.
    for state in &mut states {
        if *state == TileState::Unresolved {
            *state = TileState::Absent;
        }
    }

    let is_win = word_hash(guess) == word_hash(answer);
    (states, is_win)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use TileState::{Absent, Correct, Present};

    #[test]
    fn all_correct_wins() {
        let (states, is_win) = score_guess(b"WORDS", b"WORDS");
        assert_eq!(states, [Correct; 5]);
        assert!(is_win);
    }

    #[test]
    fn anagram_is_not_a_win() {
        // Every letter of the guess occurs in the answer, none in place
        let (states, is_win) = score_guess(b"WORDS", b"SWORD");
        assert_eq!(states, [Present; 5]);
        assert!(!is_win);
    }

    #[test]
    fn mixed_marks() {
        let (states, is_win) = score_guess(b"SWORD", b"STARE");
        assert_eq!(states, [Correct, Absent, Absent, Correct, Absent]);
        assert!(!is_win);
    }

    #[test]
    fn all_absent() {
        let (states, is_win) = score_guess(b"JUMPY", b"SLATE");
        assert_eq!(states, [Absent; 5]);
        assert!(!is_win);
    }

    #[test]
    fn repeated_letter_can_be_present_twice() {
        // ELBOW has one E, yet both Es of GEESE count as present because
        // the present pass does not consume working-copy letters.
        let (states, is_win) = score_guess(b"GEESE", b"ELBOW");
        assert_eq!(states, [Absent, Present, Present, Absent, Present]);
        assert!(!is_win);
    }

    #[test]
    fn correct_consumes_before_present() {
        // The B at position 2 is an exact match and gets consumed; the B at
        // position 0 still finds no other B to be present against.
        let (states, _) = score_guess(b"BOBBY", b"ROBIN");
        assert_eq!(states, [Absent, Correct, Correct, Absent, Absent]);
    }

    proptest! {
        #[test]
        fn guess_equal_to_answer_always_wins(word in proptest::array::uniform5(b'A'..=b'Z')) {
            let (states, is_win) = score_guess(&word, &word);
            prop_assert_eq!(states, [Correct; 5]);
            prop_assert!(is_win);
        }

        #[test]
        fn positional_match_is_always_correct(
            guess in proptest::array::uniform5(b'A'..=b'Z'),
            answer in proptest::array::uniform5(b'A'..=b'Z'),
        ) {
            let (states, _) = score_guess(&guess, &answer);
            for i in 0..5 {
                if guess[i] == answer[i] {
                    prop_assert_eq!(states[i], Correct);
                }
            }
        }

        #[test]
        fn absent_letters_never_in_answer(
            guess in proptest::array::uniform5(b'A'..=b'Z'),
            answer in proptest::array::uniform5(b'A'..=b'Z'),
        ) {
            let (states, _) = score_guess(&guess, &answer);
            for i in 0..5 {
                if states[i] == Absent {
                    // An absent mark means no unconsumed copy of the letter
                    // existed; if the letter occurs in the answer at all it
                    // was consumed by an exact match elsewhere.
                    let occurrences = answer.iter().filter(|&&b| b == guess[i]).count();
                    let consumed = (0..5)
                        .filter(|&j| guess[j] == answer[j] && answer[j] == guess[i])
                        .count();
                    prop_assert_eq!(occurrences, consumed);
                }
            }
        }

        #[test]
        fn no_tile_left_unresolved(
            guess in proptest::array::uniform5(b'A'..=b'Z'),
            answer in proptest::array::uniform5(b'A'..=b'Z'),
        ) {
            let (states, _) = score_guess(&guess, &answer);
            for state in states {
                prop_assert_ne!(state, TileState::Unresolved);
            }
        }
    }
}
