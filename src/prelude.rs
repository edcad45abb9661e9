//! Library's interface essentials.

pub use super::primitives::{Token, TokenId};
pub use super::set::TokenSet;
