//! Parsers for the two input tiers
//!
//! `underlying` reads the process notation of the underlying form,
//! `gloss` reads the stem label and its grammatical labels.

pub mod gloss;
pub mod underlying;

// Re-export commonly used types
pub use gloss::{parse_gloss, GlossParser};
pub use underlying::{parse_underlying, UnderlyingParser};
