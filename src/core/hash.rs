//! Word Hashing
//!
//! A 32-bit djb2 hash used as the compact comparison key for five-letter
//! words: wordlist membership, whole-word win checks, and the easter-egg
//! bypass all compare these values against tables shipped as data.
//!
//! # Determinism Guarantee
//!
//! The output must be bit-identical on every platform and in every build.
//! Changing this function invalidates every shipped hash table and every
//! existing save file.

/// djb2 by Dan Bernstein, accumulated in 64 bits and truncated to 32.
///
/// Hashing stops at the first NUL byte so that values match tables that
/// were generated from C strings.
///
/// # Example
///
/// ```
/// use wordgrid::word_hash;
///
/// assert_eq!(word_hash(b"NGAGE"), 0x0daa_8447); // Always the same!
/// ```
#[must_use]
pub fn word_hash(word: &[u8]) -> u32 {
    let mut hash: u64 = 5381;

    for &byte in word {
        if byte == 0 {
            break;
        }
        hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte));
    }

    (hash & 0xffff_ffff) as u32
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_seed() {
        assert_eq!(word_hash(b""), 5381);
    }

    #[test]
    fn known_values() {
        // These values must never change; the shipped hash tables and the
        // easter-egg bypass depend on them.
        assert_eq!(word_hash(b"NGAGE"), 0x0daa_8447);
    }

    #[test]
    fn stops_at_nul() {
        // C-string parity: a NUL terminator ends the word even when the
        // buffer is longer.
        assert_eq!(word_hash(b"WORDS\0\0"), word_hash(b"WORDS"));
        assert_ne!(word_hash(b"WORDS"), word_hash(b"WORD\0S"));
    }

    #[test]
    fn deterministic() {
        let a = word_hash(b"SLATE");
        let b = word_hash(b"SLATE");
        assert_eq!(a, b);
    }

    #[test]
    fn distinguishes_anagrams() {
        // Position matters: djb2 is order-sensitive.
        assert_ne!(word_hash(b"WORDS"), word_hash(b"SWORD"));
        assert_ne!(word_hash(b"STALE"), word_hash(b"SLATE"));
    }
}
