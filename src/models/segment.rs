//! Parsed forms of the two input tiers
//!
//! The underlying form becomes a sequence of `Segment`s, the gloss a
//! sequence of `MorphemeUnit`s. Both are transient and owned by one call.

use serde::{Deserialize, Serialize};

/// One piece of the underlying form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Characters retained as-is (never empty)
    Literal { text: String },

    /// A process block: `underlying` is removed, `surface` is inserted.
    /// At most one side is empty.
    Process { underlying: String, surface: String },
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal { text: text.into() }
    }

    pub fn process(underlying: impl Into<String>, surface: impl Into<String>) -> Self {
        Segment::Process {
            underlying: underlying.into(),
            surface: surface.into(),
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self, Segment::Process { .. })
    }
}

/// One unit of the gloss
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MorphemeUnit {
    /// The leading stem label, e.g. "foot"
    Stem { label: String },

    /// A bracketed grammatical label, e.g. "PL"
    Grammatical { label: String },
}

impl MorphemeUnit {
    pub fn stem(label: impl Into<String>) -> Self {
        MorphemeUnit::Stem { label: label.into() }
    }

    pub fn grammatical(label: impl Into<String>) -> Self {
        MorphemeUnit::Grammatical { label: label.into() }
    }

    pub fn label(&self) -> &str {
        match self {
            MorphemeUnit::Stem { label } | MorphemeUnit::Grammatical { label } => label,
        }
    }

    pub fn is_stem(&self) -> bool {
        matches!(self, MorphemeUnit::Stem { .. })
    }
}
