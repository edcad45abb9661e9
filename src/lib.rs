//! # Tokenset
//!
//! `tokenset` crate provides an interning token set: a collection of unique
//! strings ("tokens") in which every token receives a stable unsigned integer
//! id when it is first inserted.
//!
//! The motivating situation is lexing text into words while keeping track of
//! the distinct ones: feed every word to [`set::TokenSet::add`] and equal
//! words collapse onto a single id. Ids count up from 0 in first-insertion
//! order and are never reassigned while the set lives; removing a token
//! retires its id, and only [`set::TokenSet::reset`] rewinds the counter for
//! a fresh start.
//!
//! Iteration and [`set::TokenSet::snapshot`] follow insertion order until
//! [`set::TokenSet::sort`] switches the set to ascending lexicographic order.
//! Sorting never changes the token-id pairing.
//!
//! ## Example
//!
//! ```rust
//! use tokenset::prelude::*;
//!
//! let mut words = TokenSet::new();
//! for word in ["the", "cat", "saw", "the", "mouse"] {
//!     words.add(word);
//! }
//!
//! assert_eq!(words.len(), 4);
//! assert_eq!(words.token_to_id("the"), Some(0));
//! assert_eq!(words.token_to_id("mouse"), Some(3));
//!
//! words.sort();
//! assert_eq!(words.snapshot(), ["cat", "mouse", "saw", "the"]);
//! assert_eq!(words.token_to_id("the"), Some(0));
//! ```

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod set;

pub use error::{Error, Result};

/// Returns the version of this crate, e.g. `"1.4.0-dev0"`. Informational
/// only.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_pinned() {
        assert_eq!(super::version(), "1.4.0-dev0");
    }
}
