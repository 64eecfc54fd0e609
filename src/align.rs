//! Positional aligner
//!
//! Pairs the n-th process block of the underlying form with the n-th
//! grammatical unit of the gloss and expands every segment into
//! `(grapheme, op, span)` triples in left-to-right order.
//!
//! Span 0 is the stem. Literal text and the deleted side of a block stay
//! on the span that was active before the block; the inserted side goes
//! to the paired grammatical unit. A block never moves the active span.

use serde::{Deserialize, Serialize};

use crate::error::AlignmentError;
use crate::models::record::Op;
use crate::models::segment::{MorphemeUnit, Segment};
use crate::utils::grapheme::graphemes;

/// One emitted grapheme before tagging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AlignedChar {
    pub grapheme: String,
    pub op: Op,
    pub span: usize,
}

/// Aligner output: triples in emission order plus one label per span
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub chars: Vec<AlignedChar>,
    /// `labels[0]` is the stem label, `labels[k]` the k-th grammatical label
    pub labels: Vec<String>,
}

impl Alignment {
    pub fn span_count(&self) -> usize {
        self.labels.len()
    }
}

/// Accumulator threaded through the fold over segments
struct AlignState {
    current_span: usize,
    units_used: usize,
    chars: Vec<AlignedChar>,
}

impl AlignState {
    fn new() -> Self {
        Self {
            current_span: 0,
            units_used: 0,
            chars: Vec::new(),
        }
    }

    fn emit(&mut self, text: &str, op: Op, span: usize) {
        for grapheme in graphemes(text) {
            log::trace!("  '{}' {} span={}", grapheme, op, span);
            self.chars.push(AlignedChar {
                grapheme: grapheme.to_string(),
                op,
                span,
            });
        }
    }

    fn step(mut self, segment: &Segment) -> Self {
        match segment {
            Segment::Literal { text } => {
                let span = self.current_span;
                self.emit(text, Op::Same, span);
            }
            Segment::Process { underlying, surface } => {
                self.units_used += 1;
                let target_span = self.units_used;
                let span = self.current_span;
                self.emit(underlying, Op::Delete, span);
                self.emit(surface, Op::Add, target_span);
            }
        }
        self
    }
}

/// Collect span labels, requiring exactly one stem in first position
fn span_labels(units: &[MorphemeUnit]) -> Result<Vec<String>, AlignmentError> {
    match units.first() {
        Some(MorphemeUnit::Stem { .. }) => {}
        _ => return Err(AlignmentError::MissingStem),
    }

    if let Some(position) = units.iter().skip(1).position(MorphemeUnit::is_stem) {
        return Err(AlignmentError::MisplacedStem { position: position + 1 });
    }

    Ok(units.iter().map(|unit| unit.label().to_string()).collect())
}

pub fn align(segments: &[Segment], units: &[MorphemeUnit]) -> Result<Alignment, AlignmentError> {
    let labels = span_labels(units)?;

    let processes = segments.iter().filter(|segment| segment.is_process()).count();
    let grammatical = labels.len() - 1;
    if processes != grammatical {
        return Err(AlignmentError::ProcessCountMismatch {
            processes,
            units: grammatical,
        });
    }

    let state = segments.iter().fold(AlignState::new(), AlignState::step);
    log::debug!("Aligned {} grapheme(s) over {} span(s)", state.chars.len(), labels.len());

    Ok(Alignment {
        chars: state.chars,
        labels,
    })
}
