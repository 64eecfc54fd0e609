//! BILOU tagger
//!
//! Tags are assigned per span, using the order in which that span's
//! characters were emitted. A span's characters need not be contiguous:
//! in `f{oo>ee}t` the stem owns `f`, `o`, `o` and `t`, so `t` closes the
//! stem with `L` even though the plural span sits between them.

use std::collections::BTreeMap;

use crate::align::Alignment;
use crate::models::record::{CharacterRecord, Tag};

/// Tag an alignment. Records keep the alignment's global order.
///
/// Every span in `alignment.chars` must have an entry in
/// `alignment.labels`; `align` guarantees this.
pub fn tag(alignment: Alignment) -> Vec<CharacterRecord> {
    let Alignment { chars, labels } = alignment;

    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (position, aligned) in chars.iter().enumerate() {
        groups.entry(aligned.span).or_default().push(position);
    }

    let mut tags = vec![Tag::Unit; chars.len()];
    for positions in groups.values() {
        let len = positions.len();
        for (index, &position) in positions.iter().enumerate() {
            tags[position] = Tag::for_position(index, len);
        }
    }

    chars
        .into_iter()
        .zip(tags)
        .map(|(aligned, tag)| CharacterRecord {
            gloss: labels[aligned.span].clone(),
            grapheme: aligned.grapheme,
            tag,
            op: aligned.op,
            span: aligned.span,
        })
        .collect()
}

/// Check that every span's tags read `U` or `B I* L` in emission order
pub fn is_well_formed(records: &[CharacterRecord]) -> bool {
    let mut runs: BTreeMap<usize, Vec<Tag>> = BTreeMap::new();
    for record in records {
        runs.entry(record.span).or_default().push(record.tag);
    }

    runs.values().all(|run| {
        let len = run.len();
        run.iter()
            .enumerate()
            .all(|(index, &tag)| tag == Tag::for_position(index, len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::AlignedChar;
    use crate::models::record::Op;

    fn aligned(grapheme: &str, op: Op, span: usize) -> AlignedChar {
        AlignedChar {
            grapheme: grapheme.to_string(),
            op,
            span,
        }
    }

    #[test]
    fn test_interleaved_spans() {
        let alignment = Alignment {
            chars: vec![
                aligned("f", Op::Same, 0),
                aligned("o", Op::Delete, 0),
                aligned("e", Op::Add, 1),
                aligned("t", Op::Same, 0),
            ],
            labels: vec!["foot".to_string(), "PL".to_string()],
        };
        let records = tag(alignment);
        let tags: Vec<Tag> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![Tag::Begin, Tag::Inside, Tag::Unit, Tag::Last]);
        assert_eq!(records[2].gloss, "PL");
        assert_eq!(records[3].gloss, "foot");
        assert!(is_well_formed(&records));
    }

    #[test]
    fn test_empty_alignment() {
        let alignment = Alignment {
            chars: Vec::new(),
            labels: vec!["x".to_string()],
        };
        assert!(tag(alignment).is_empty());
    }

    #[test]
    fn test_is_well_formed_rejects_bad_runs() {
        let records = vec![
            CharacterRecord::new("a", Tag::Begin, Op::Same, 0, "ab"),
            CharacterRecord::new("b", Tag::Inside, Op::Same, 0, "ab"),
        ];
        assert!(!is_well_formed(&records));

        let records = vec![CharacterRecord::new("a", Tag::Begin, Op::Same, 0, "a")];
        assert!(!is_well_formed(&records));
    }
}
