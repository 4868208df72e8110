//! Wordlists and Languages
//!
//! Four shipped languages, each with an answer table (words the engine may
//! pick as the round's solution) and an allowed table (additional words
//! accepted as guesses). Words are stored as raw 5-byte arrays in the
//! language's single-byte encoding: Latin-1 for English, German and
//! Finnish, code page 1251 for Russian.
//!
//! Guess membership is checked against sorted hash tables, not the word
//! bytes, so lookup is a binary search per table.

pub mod daily;
pub mod data;

use serde::{Deserialize, Serialize};

use crate::core::word_hash;
use crate::game::tile::letter;
use crate::WORD_LEN;

/// Hash of the magic word "NGAGE"; always accepted as a guess in every
/// language.
pub const EASTER_EGG_HASH: u32 = 0x0daa_8447;

/// A shipped language.
///
/// Discriminants are part of the save format; do not reorder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Language {
    /// English, Latin-1.
    #[default]
    English = 0,
    /// Russian, code page 1251.
    Russian = 1,
    /// German, Latin-1.
    German = 2,
    /// Finnish, Latin-1.
    Finnish = 3,
}

impl Language {
    /// The language after this one in the menu cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::English => Self::Russian,
            Self::Russian => Self::German,
            Self::German => Self::Finnish,
            Self::Finnish => Self::English,
        }
    }

    /// Language from its save-format discriminant.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::English),
            1 => Some(Self::Russian),
            2 => Some(Self::German),
            3 => Some(Self::Finnish),
            _ => None,
        }
    }
}

/// The active language's alphabet, dictionaries and lookup tables.
///
/// Built once per language switch; the hash tables are sorted at build
/// time so guess lookup is two binary searches.
#[derive(Clone, Debug)]
pub struct Wordlist {
    language: Language,
    first_letter: u8,
    last_letter: u8,
    special_chars: &'static [u8],
    title: &'static [u8; WORD_LEN],
    answers: &'static [[u8; WORD_LEN]],
    answer_hashes: Vec<u32>,
    allowed_hashes: Vec<u32>,
}

impl Wordlist {
    /// Build the wordlist for a language.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        let (first, last, special_chars, title, answers, allowed): (
            u8,
            u8,
            &'static [u8],
            &'static [u8; WORD_LEN],
            &'static [[u8; WORD_LEN]],
            &'static [[u8; WORD_LEN]],
        ) = match language {
            Language::English => (
                b'A',
                b'Z',
                data::en::SPECIAL_CHARS,
                data::en::TITLE,
                data::en::ANSWERS,
                data::en::ALLOWED,
            ),
            Language::Russian => (
                0xC0,
                0xDF,
                data::ru::SPECIAL_CHARS,
                data::ru::TITLE,
                data::ru::ANSWERS,
                data::ru::ALLOWED,
            ),
            Language::German => (
                b'A',
                b'Z',
                data::de::SPECIAL_CHARS,
                data::de::TITLE,
                data::de::ANSWERS,
                data::de::ALLOWED,
            ),
            Language::Finnish => (
                b'A',
                b'Z',
                data::fi::SPECIAL_CHARS,
                data::fi::TITLE,
                data::fi::ANSWERS,
                data::fi::ALLOWED,
            ),
        };

        let mut answer_hashes: Vec<u32> = answers.iter().map(|w| word_hash(w)).collect();
        answer_hashes.sort_unstable();
        let mut allowed_hashes: Vec<u32> = allowed.iter().map(|w| word_hash(w)).collect();
        allowed_hashes.sort_unstable();

        Self {
            language,
            first_letter: first,
            last_letter: last,
            special_chars,
            title,
            answers,
            answer_hashes,
            allowed_hashes,
        }
    }

    /// The language this wordlist belongs to.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Localized title word painted on the menu board.
    #[must_use]
    pub fn title(&self) -> &[u8; WORD_LEN] {
        self.title
    }

    /// Whether the alphabet is the CP1251 Cyrillic block.
    #[must_use]
    pub fn is_cyrillic(&self) -> bool {
        self.language == Language::Russian
    }

    /// First letter of the alphabet.
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.first_letter
    }

    /// Last letter of the alphabet.
    #[must_use]
    pub fn last_letter(&self) -> u8 {
        self.last_letter
    }

    /// Characters the special-character key cycles through.
    #[must_use]
    pub fn special_chars(&self) -> &'static [u8] {
        self.special_chars
    }

    /// Number of answer words.
    #[must_use]
    pub fn answer_count(&self) -> u32 {
        self.answers.len() as u32
    }

    /// Answer word at `index`, wrapping on overflow.
    #[must_use]
    pub fn answer_at(&self, index: u32) -> [u8; WORD_LEN] {
        self.answers[index as usize % self.answers.len()]
    }

    /// Whether `guess` is accepted: an answer word, an allowed word, or
    /// the magic word.
    #[must_use]
    pub fn contains_guess(&self, guess: &[u8; WORD_LEN]) -> bool {
        let hash = word_hash(guess);
        if hash == EASTER_EGG_HASH {
            return true;
        }
        self.answer_hashes.binary_search(&hash).is_ok()
            || self.allowed_hashes.binary_search(&hash).is_ok()
    }

    /// Letter after `current` in the alphabet, wrapping past the end.
    /// Anything outside the alphabet (empty cell, special character) maps
    /// to the first letter.
    #[must_use]
    pub fn next_letter(&self, current: u8) -> u8 {
        if current < self.first_letter || current >= self.last_letter {
            self.first_letter
        } else {
            current + 1
        }
    }

    /// Letter before `current` in the alphabet, wrapping past the start.
    #[must_use]
    pub fn prev_letter(&self, current: u8) -> u8 {
        if current <= self.first_letter || current > self.last_letter {
            self.last_letter
        } else {
            current - 1
        }
    }

    /// Special character after `current`, cycling through
    /// [`special_chars`](Self::special_chars) with the hyphen first.
    #[must_use]
    pub fn next_special_char(&self, current: u8) -> u8 {
        if current == letter::HYPHEN {
            self.special_chars.first().copied().unwrap_or(letter::HYPHEN)
        } else {
            match self.special_chars.iter().position(|&c| c == current) {
                Some(i) if i + 1 < self.special_chars.len() => self.special_chars[i + 1],
                _ => letter::HYPHEN,
            }
        }
    }

    /// Inclusive letter range owned by keypad digit `digit` (2..=9), or
    /// `None` for non-letter keys.
    #[must_use]
    pub fn group_range(&self, digit: u8) -> Option<(u8, u8)> {
        if self.is_cyrillic() {
            match digit {
                2 => Some((0xC0, 0xC3)), // А Б В Г
                3 => Some((0xC4, 0xC7)), // Д Е Ж З
                4 => Some((0xC8, 0xCA)), // И Й К
                5 => Some((0xCB, 0xCF)), // Л М Н О П
                6 => Some((0xD0, 0xD3)), // Р С Т У
                7 => Some((0xD4, 0xD7)), // Ф Х Ц Ч
                8 => Some((0xD8, 0xDB)), // Ш Щ Ъ Ы
                9 => Some((0xDC, 0xDF)), // Ь Э Ю Я
                _ => None,
            }
        } else {
            match digit {
                2 => Some((b'A', b'C')),
                3 => Some((b'D', b'F')),
                4 => Some((b'G', b'I')),
                5 => Some((b'J', b'L')),
                6 => Some((b'M', b'O')),
                7 => Some((b'P', b'S')),
                8 => Some((b'T', b'V')),
                9 => Some((b'W', b'Z')),
                _ => None,
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all_languages() -> [Language; 4] {
        [
            Language::English,
            Language::Russian,
            Language::German,
            Language::Finnish,
        ]
    }

    #[test]
    fn language_cycle_visits_all() {
        let mut lang = Language::English;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(lang, Language::English);
        seen.sort_by_key(|l| *l as u8);
        assert_eq!(seen, all_languages());
    }

    #[test]
    fn answer_words_are_accepted_as_guesses() {
        for lang in all_languages() {
            let list = Wordlist::for_language(lang);
            for i in 0..list.answer_count() {
                let word = list.answer_at(i);
                assert!(list.contains_guess(&word), "{lang:?} answer {i} rejected");
            }
        }
    }

    #[test]
    fn allowed_words_are_accepted_as_guesses() {
        let list = Wordlist::for_language(Language::English);
        assert!(list.contains_guess(b"SWORD"));
    }

    #[test]
    fn garbage_is_rejected() {
        for lang in all_languages() {
            let list = Wordlist::for_language(lang);
            assert!(!list.contains_guess(b"QQQQQ"));
            assert!(!list.contains_guess(b"\x00\x00\x00\x00\x00"));
        }
    }

    #[test]
    fn magic_word_accepted_everywhere() {
        for lang in all_languages() {
            let list = Wordlist::for_language(lang);
            assert!(list.contains_guess(b"NGAGE"));
        }
    }

    #[test]
    fn no_hash_collisions_in_shipped_tables() {
        // A collision would make two distinct words interchangeable for
        // both membership and the win check.
        for lang in all_languages() {
            let list = Wordlist::for_language(lang);
            let mut hashes = list.answer_hashes.clone();
            hashes.extend_from_slice(&list.allowed_hashes);
            hashes.sort_unstable();
            let before = hashes.len();
            hashes.dedup();
            assert_eq!(before, hashes.len(), "hash collision in {lang:?} tables");
        }
    }

    #[test]
    fn every_shipped_word_uses_its_alphabet() {
        for lang in all_languages() {
            let list = Wordlist::for_language(lang);
            let valid = |b: u8| {
                (b >= list.first_letter() && b <= list.last_letter())
                    || b == crate::game::tile::letter::HYPHEN
                    || list.special_chars().contains(&b)
            };
            for i in 0..list.answer_count() {
                let word = list.answer_at(i);
                assert!(
                    word.iter().all(|&b| valid(b)),
                    "{lang:?} answer {i} has out-of-alphabet byte: {word:?}"
                );
            }
        }
    }

    #[test]
    fn letter_cycling_wraps() {
        let list = Wordlist::for_language(Language::English);
        assert_eq!(list.next_letter(b'A'), b'B');
        assert_eq!(list.next_letter(b'Z'), b'A');
        assert_eq!(list.next_letter(0x00), b'A');
        assert_eq!(list.prev_letter(b'B'), b'A');
        assert_eq!(list.prev_letter(b'A'), b'Z');
        assert_eq!(list.prev_letter(0x00), b'Z');

        let ru = Wordlist::for_language(Language::Russian);
        assert_eq!(ru.next_letter(0xDF), 0xC0);
        assert_eq!(ru.prev_letter(0xC0), 0xDF);
    }

    #[test]
    fn special_char_cycle() {
        use crate::game::tile::letter::HYPHEN;

        // English has no extra specials, so the key only yields hyphen.
        let en = Wordlist::for_language(Language::English);
        assert_eq!(en.next_special_char(0x00), HYPHEN);
        assert_eq!(en.next_special_char(HYPHEN), HYPHEN);

        // German cycles hyphen, then the umlauts and eszett, then wraps.
        let de = Wordlist::for_language(Language::German);
        assert_eq!(de.next_special_char(0x00), HYPHEN);
        assert_eq!(de.next_special_char(HYPHEN), 0xC4);
        assert_eq!(de.next_special_char(0xC4), 0xD6);
        assert_eq!(de.next_special_char(0xD6), 0xDC);
        assert_eq!(de.next_special_char(0xDC), 0xDF);
        assert_eq!(de.next_special_char(0xDF), HYPHEN);
    }

    #[test]
    fn keypad_groups_cover_latin_alphabet() {
        let list = Wordlist::for_language(Language::English);
        let mut covered = Vec::new();
        for digit in 2..=9 {
            let (lo, hi) = list.group_range(digit).unwrap();
            covered.extend(lo..=hi);
        }
        assert_eq!(covered, (b'A'..=b'Z').collect::<Vec<u8>>());
        assert_eq!(list.group_range(0), None);
        assert_eq!(list.group_range(1), None);
    }

    #[test]
    fn keypad_groups_cover_cyrillic_alphabet() {
        let list = Wordlist::for_language(Language::Russian);
        let mut covered = Vec::new();
        for digit in 2..=9 {
            let (lo, hi) = list.group_range(digit).unwrap();
            covered.extend(lo..=hi);
        }
        assert_eq!(covered, (0xC0..=0xDF).collect::<Vec<u8>>());
    }
}
