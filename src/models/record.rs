//! Character-level output records
//!
//! A `CharacterRecord` is the unit handed to dataset serializers: one
//! grapheme with its BILOU tag, edit operation, span index and gloss.
//! Tags and operations serialize to the single-letter codes used in
//! BILOU corpora ("B"/"I"/"L"/"U", "S"/"D"/"A").

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a character within its span
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    #[serde(rename = "B")]
    Begin,
    #[serde(rename = "I")]
    Inside,
    #[serde(rename = "L")]
    Last,
    /// Single-character span
    #[serde(rename = "U")]
    Unit,
}

impl Tag {
    /// Tag for the character at `index` of a span holding `len` characters
    pub fn for_position(index: usize, len: usize) -> Tag {
        if len == 1 {
            Tag::Unit
        } else if index == 0 {
            Tag::Begin
        } else if index + 1 == len {
            Tag::Last
        } else {
            Tag::Inside
        }
    }

    pub fn code(self) -> char {
        match self {
            Tag::Begin => 'B',
            Tag::Inside => 'I',
            Tag::Last => 'L',
            Tag::Unit => 'U',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Edit operation that produced a character.
///
/// New process kinds (reduplication, tone overwriting, ...) are added as
/// variants; match arms outside this crate need a wildcard.
#[non_exhaustive]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Present in both underlying and surface form
    #[serde(rename = "S")]
    Same,
    /// Present only in the underlying form
    #[serde(rename = "D")]
    Delete,
    /// Present only in the surface form
    #[serde(rename = "A")]
    Add,
}

impl Op {
    pub fn code(self) -> char {
        match self {
            Op::Same => 'S',
            Op::Delete => 'D',
            Op::Add => 'A',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One annotated grapheme
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The grapheme cluster (e.g. "f", "é")
    #[serde(rename = "char")]
    pub grapheme: String,

    pub tag: Tag,

    pub op: Op,

    /// 0 for the stem, k for the k-th grammatical unit
    pub span: usize,

    /// Label of the owning unit
    pub gloss: String,
}

impl CharacterRecord {
    pub fn new(grapheme: impl Into<String>, tag: Tag, op: Op, span: usize, gloss: impl Into<String>) -> Self {
        Self {
            grapheme: grapheme.into(),
            tag,
            op,
            span,
            gloss: gloss.into(),
        }
    }
}

/// Tab-separated line: char, tag, op, span, gloss
impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}", self.grapheme, self.tag, self.op, self.span, self.gloss)
    }
}
