//! Error types for notation conversion
//!
//! Parse failures (`NotationError`) and pairing failures (`AlignmentError`)
//! are deterministic: a record that produces either is unusable as a whole.

use std::fmt;

use thiserror::Error;

/// Which of the two input strings an error was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Underlying,
    Gloss,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Underlying => write!(f, "underlying form"),
            Tier::Gloss => write!(f, "gloss"),
        }
    }
}

/// Malformed bracket structure. Offsets are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("{tier}: block opened at {offset} is never closed")]
    UnclosedBlock { tier: Tier, offset: usize },

    #[error("{tier}: closing brace at {offset} has no matching opening brace")]
    UnopenedBlock { tier: Tier, offset: usize },

    #[error("{tier}: block opened at {offset} is nested inside another block")]
    NestedBlock { tier: Tier, offset: usize },

    #[error("{tier}: block at {offset} is empty")]
    EmptyBlock { tier: Tier, offset: usize },

    #[error("underlying form: second substitution marker at {offset}")]
    RepeatedMarker { offset: usize },

    #[error("{tier}: substitution marker at {offset} outside of a block")]
    StrayMarker { tier: Tier, offset: usize },

    #[error("gloss: substitution marker at {offset} inside a label")]
    MarkerInLabel { offset: usize },

    #[error("gloss: missing stem label")]
    EmptyStem,

    #[error("gloss: text after the grammatical labels at {offset}")]
    TrailingText { offset: usize },
}

/// Violation of positional pairing between process blocks and gloss units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("{processes} process block(s) in the underlying form but {units} grammatical unit(s) in the gloss")]
    ProcessCountMismatch { processes: usize, units: usize },

    #[error("gloss has no stem unit")]
    MissingStem,

    #[error("stem unit found at position {position}, expected only at position 0")]
    MisplacedStem { position: usize },
}

/// Top-level conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("notation error: {0}")]
    Notation(#[from] NotationError),

    #[error("alignment error: {0}")]
    Alignment(#[from] AlignmentError),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
