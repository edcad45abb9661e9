//! Defines fundamental types used throughout the crate.

/// Token content.
pub type Token = String;

/// Token identifier.
pub type TokenId = u32;
