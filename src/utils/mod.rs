//! Utility modules

pub mod grapheme;

pub use grapheme::*;
