//! Underlying-form parser
//!
//! Tokenizes an underlying form such as `f{oo>ee}t` into literal runs and
//! process blocks:
//!
//! ```text
//! form    := (literal | block)*
//! block   := "{" side ">" side "}" | "{" side "}"
//! ```
//!
//! A block without a marker is resolved by `NotationRules::bare_block`.
//!
//! Delimiters are matched per `char`, so segment boundaries can split a
//! grapheme cluster: in `{>e}\u{301}x` the combining acute starts the
//! literal after the block and becomes its own record.

use crate::error::{NotationError, Tier};
use crate::models::rules::NotationRules;
use crate::models::segment::Segment;

/// Parse an underlying form with the default GGG rules
pub fn parse_underlying(text: &str) -> Result<Vec<Segment>, NotationError> {
    UnderlyingParser::new().parse(text)
}

#[derive(Clone, Debug, Default)]
pub struct UnderlyingParser {
    rules: NotationRules,
}

/// Block being read: where it opened, text left of the marker, and
/// text right of the marker once one has been seen.
struct OpenBlock {
    offset: usize,
    left: String,
    right: Option<String>,
}

impl UnderlyingParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: NotationRules) -> Self {
        Self { rules }
    }

    pub fn parse(&self, text: &str) -> Result<Vec<Segment>, NotationError> {
        let rules = &self.rules;
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut block: Option<OpenBlock> = None;

        for (offset, c) in text.char_indices() {
            match block.as_mut() {
                None => {
                    if c == rules.open {
                        flush_literal(&mut literal, &mut segments);
                        block = Some(OpenBlock { offset, left: String::new(), right: None });
                    } else if c == rules.close {
                        return Err(NotationError::UnopenedBlock { tier: Tier::Underlying, offset });
                    } else if c == rules.marker {
                        return Err(NotationError::StrayMarker { tier: Tier::Underlying, offset });
                    } else {
                        literal.push(c);
                    }
                }
                Some(open) => {
                    if c == rules.open {
                        return Err(NotationError::NestedBlock { tier: Tier::Underlying, offset });
                    } else if c == rules.marker {
                        if open.right.is_some() {
                            return Err(NotationError::RepeatedMarker { offset });
                        }
                        open.right = Some(String::new());
                    } else if c != rules.close {
                        match open.right.as_mut() {
                            Some(right) => right.push(c),
                            None => open.left.push(c),
                        }
                    }
                }
            }

            if c == rules.close {
                if let Some(open) = block.take() {
                    segments.push(self.close_block(open)?);
                }
            }
        }

        if let Some(open) = block {
            return Err(NotationError::UnclosedBlock { tier: Tier::Underlying, offset: open.offset });
        }
        flush_literal(&mut literal, &mut segments);

        log::debug!("Parsed underlying form '{}' into {} segment(s)", text, segments.len());
        Ok(segments)
    }

    fn close_block(&self, block: OpenBlock) -> Result<Segment, NotationError> {
        let (underlying, surface) = match block.right {
            Some(right) => (block.left, right),
            None => {
                let (underlying, surface) = self.rules.bare_block.split(&block.left);
                (underlying.to_string(), surface.to_string())
            }
        };

        if underlying.is_empty() && surface.is_empty() {
            return Err(NotationError::EmptyBlock { tier: Tier::Underlying, offset: block.offset });
        }

        log::trace!("Process block at {}: '{}' > '{}'", block.offset, underlying, surface);
        Ok(Segment::Process { underlying, surface })
    }
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal { text: std::mem::take(literal) });
    }
}
