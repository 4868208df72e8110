//! Core deterministic primitives.
//!
//! Word hashing and pseudo-random number generation. Both are pinned to
//! exact bit-level behavior: save files and the shipped wordlist hash
//! tables depend on these never changing.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::word_hash;
pub use rng::Xorshift32;
