//! Form + gloss → character records
//!
//! Runs the four stages in order. Any stage failure is returned as is and
//! nothing is emitted for the record.

use crate::align::align;
use crate::error::Result;
use crate::models::record::CharacterRecord;
use crate::models::rules::NotationRules;
use crate::parse::{GlossParser, UnderlyingParser};
use crate::tagger::{self, tag};

/// Convert an underlying form and its gloss using the default GGG rules
pub fn merged_form_gloss(ur: &str, gl: &str) -> Result<Vec<CharacterRecord>> {
    merged_form_gloss_with(ur, gl, &NotationRules::default())
}

pub fn merged_form_gloss_with(ur: &str, gl: &str, rules: &NotationRules) -> Result<Vec<CharacterRecord>> {
    let result = convert(ur, gl, rules);
    if let Err(e) = &result {
        log::warn!("Rejected '{}' / '{}': {}", ur, gl, e);
    }
    result
}

fn convert(ur: &str, gl: &str, rules: &NotationRules) -> Result<Vec<CharacterRecord>> {
    let segments = UnderlyingParser::with_rules(rules.clone()).parse(ur)?;
    let units = GlossParser::with_rules(rules.clone()).parse(gl)?;
    let alignment = align(&segments, &units)?;
    let records = tag(alignment);

    debug_assert!(tagger::is_well_formed(&records));
    log::debug!("Converted '{}' / '{}' into {} record(s)", ur, gl, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlignmentError, ConversionError, NotationError};
    use crate::models::record::{Op, Tag};
    use crate::models::rules::BareBlockPolicy;

    #[test]
    fn test_stem_only() {
        let records = merged_form_gloss("cat", "cat").unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.span == 0 && r.op == Op::Same && r.gloss == "cat"));
    }

    #[test]
    fn test_underlying_errors_reported_first() {
        let err = merged_form_gloss("f{oo", "foot{").unwrap_err();
        assert!(matches!(err, ConversionError::Notation(NotationError::UnclosedBlock { .. })));
    }

    #[test]
    fn test_alignment_error_propagates() {
        let err = merged_form_gloss("f{oo>ee}t", "foot").unwrap_err();
        assert_eq!(
            err,
            ConversionError::Alignment(AlignmentError::ProcessCountMismatch { processes: 1, units: 0 })
        );
    }

    #[test]
    fn test_rules_reach_the_parser() {
        let rules = NotationRules { bare_block: BareBlockPolicy::Deletion, ..NotationRules::default() };
        let records = merged_form_gloss_with("cat{s}", "cat{X}", &rules).unwrap();
        let last = records.last().unwrap();
        assert_eq!((last.op, last.span, last.tag), (Op::Delete, 0, Tag::Last));
    }
}
