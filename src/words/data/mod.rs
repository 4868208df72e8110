//! Shipped Dictionaries
//!
//! Static word tables, one module per language. Answer tables hold the
//! words a round's solution is drawn from; allowed tables hold extra words
//! accepted as guesses but never picked as solutions. A word appears in at
//! most one table of its language.
//!
//! Non-ASCII letters are raw bytes in the language's encoding. Keep each
//! table free of duplicates; the lookup tables are hash-based and a
//! duplicate or collision makes two words indistinguishable.
//!
//! The English tables are a condensed build of the published dictionary
//! (2315 answers and 10663 extra guesses in full). The daily launch
//! offset in [`crate::words::daily`] assumes the full-size answer table,
//! so a condensed build reaches the wrap point sooner and repeats
//! answers earlier than the published schedule.

pub mod de;
pub mod en;
pub mod fi;
pub mod ru;
