//! Gloss parser
//!
//! A gloss is a stem label followed by bracketed grammatical labels,
//! e.g. `foot{PL}` or `sing{PST}{3SG}`. Labels are kept verbatim. The
//! substitution marker is only reserved inside and after the labels; a
//! stem may contain it.

use crate::error::{NotationError, Tier};
use crate::models::rules::NotationRules;
use crate::models::segment::MorphemeUnit;

/// Parse a gloss with the default GGG rules
pub fn parse_gloss(text: &str) -> Result<Vec<MorphemeUnit>, NotationError> {
    GlossParser::new().parse(text)
}

#[derive(Clone, Debug, Default)]
pub struct GlossParser {
    rules: NotationRules,
}

enum State {
    Stem,
    Label { offset: usize },
    AfterLabel,
}

impl GlossParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: NotationRules) -> Self {
        Self { rules }
    }

    pub fn parse(&self, text: &str) -> Result<Vec<MorphemeUnit>, NotationError> {
        let rules = &self.rules;
        let mut stem = String::new();
        let mut label = String::new();
        let mut labels = Vec::new();
        let mut state = State::Stem;

        for (offset, c) in text.char_indices() {
            state = match state {
                State::Label { offset: open_at } => {
                    if c == rules.open {
                        return Err(NotationError::NestedBlock { tier: Tier::Gloss, offset });
                    } else if c == rules.marker {
                        return Err(NotationError::MarkerInLabel { offset });
                    } else if c == rules.close {
                        if label.is_empty() {
                            return Err(NotationError::EmptyBlock { tier: Tier::Gloss, offset: open_at });
                        }
                        labels.push(std::mem::take(&mut label));
                        State::AfterLabel
                    } else {
                        label.push(c);
                        State::Label { offset: open_at }
                    }
                }
                State::Stem | State::AfterLabel if c == rules.open => {
                    if stem.is_empty() {
                        return Err(NotationError::EmptyStem);
                    }
                    State::Label { offset }
                }
                _ if c == rules.close => {
                    return Err(NotationError::UnopenedBlock { tier: Tier::Gloss, offset });
                }
                State::AfterLabel if c == rules.marker => {
                    return Err(NotationError::StrayMarker { tier: Tier::Gloss, offset });
                }
                State::Stem => {
                    stem.push(c);
                    State::Stem
                }
                State::AfterLabel => {
                    return Err(NotationError::TrailingText { offset });
                }
            };
        }

        if let State::Label { offset } = state {
            return Err(NotationError::UnclosedBlock { tier: Tier::Gloss, offset });
        }
        if stem.is_empty() {
            return Err(NotationError::EmptyStem);
        }

        log::debug!("Parsed gloss '{}' into stem '{}' and {} label(s)", text, stem, labels.len());

        let mut units = Vec::with_capacity(labels.len() + 1);
        units.push(MorphemeUnit::Stem { label: stem });
        units.extend(labels.into_iter().map(|label| MorphemeUnit::Grammatical { label }));
        Ok(units)
    }
}
