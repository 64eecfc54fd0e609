//! Properties that hold for every valid form/gloss pair

use ggg_bilou::models::{Op, Segment, Tag};
use ggg_bilou::parse::{parse_gloss, parse_underlying};
use ggg_bilou::tagger::is_well_formed;
use ggg_bilou::utils::grapheme_count;
use ggg_bilou::merged_form_gloss;

/// Valid pairs covering stems, prefixes, suffixes, infixes and mutations
const PAIRS: &[(&str, &str)] = &[
    ("cat", "cat"),
    ("a", "a"),
    ("f{oo>ee}t", "foot{PL}"),
    ("cat{>s}", "cat{PL}"),
    ("{>un}do", "do{NEG}"),
    ("ca{t>}", "cat{TRUNC}"),
    ("{>ge}sung{>en}", "sing{PTCP}{PST}"),
    ("s{>um}ulat", "sulat{AV}"),
    ("m{ou>i}se", "mouse{PL}"),
    ("{a>b}{>c}", "x{P}{Q}"),
    ("ke\u{301}{>n}", "ke\u{301}{ACC}"),
    ("{>x}", "y{Z}"),
];

fn expected_len(ur: &str) -> usize {
    parse_underlying(ur)
        .unwrap()
        .iter()
        .map(|segment| match segment {
            Segment::Literal { text } => grapheme_count(text),
            Segment::Process { underlying, surface } => grapheme_count(underlying) + grapheme_count(surface),
        })
        .sum()
}

#[test]
fn test_record_count_matches_segment_material() {
    for (ur, gl) in PAIRS {
        let records = merged_form_gloss(ur, gl).unwrap();
        assert_eq!(records.len(), expected_len(ur), "length mismatch for {} / {}", ur, gl);
    }
}

#[test]
fn test_spans_within_gloss_units() {
    for (ur, gl) in PAIRS {
        let units = parse_gloss(gl).unwrap();
        let processes = parse_underlying(ur).unwrap().iter().filter(|s| s.is_process()).count();
        assert_eq!(processes, units.len() - 1);

        let records = merged_form_gloss(ur, gl).unwrap();
        for record in &records {
            assert!(record.span < units.len(), "span {} out of range for {}", record.span, gl);
            assert_eq!(record.gloss, units[record.span].label());
        }
    }
}

#[test]
fn test_every_span_is_a_bilou_run() {
    for (ur, gl) in PAIRS {
        let records = merged_form_gloss(ur, gl).unwrap();
        assert!(is_well_formed(&records), "bad tag run for {} / {}", ur, gl);

        let mut spans: Vec<usize> = records.iter().map(|r| r.span).collect();
        spans.sort_unstable();
        spans.dedup();
        for span in spans {
            let tags: Vec<Tag> = records.iter().filter(|r| r.span == span).map(|r| r.tag).collect();
            if tags.len() == 1 {
                assert_eq!(tags, vec![Tag::Unit]);
            } else {
                assert_eq!(tags[0], Tag::Begin);
                assert_eq!(tags[tags.len() - 1], Tag::Last);
                assert!(tags[1..tags.len() - 1].iter().all(|t| *t == Tag::Inside));
            }
        }
    }
}

#[test]
fn test_operations_partition_by_span() {
    for (ur, gl) in PAIRS {
        for record in merged_form_gloss(ur, gl).unwrap() {
            match record.op {
                Op::Same | Op::Delete => assert_eq!(record.span, 0, "{} / {}", ur, gl),
                Op::Add => assert!(record.span >= 1, "{} / {}", ur, gl),
                _ => unreachable!(),
            }
        }
    }
}

#[test]
fn test_parsing_is_repeatable() {
    for (ur, gl) in PAIRS {
        assert_eq!(parse_underlying(ur).unwrap(), parse_underlying(ur).unwrap());
        assert_eq!(parse_gloss(gl).unwrap(), parse_gloss(gl).unwrap());
        assert_eq!(merged_form_gloss(ur, gl).unwrap(), merged_form_gloss(ur, gl).unwrap());
    }
}

#[test]
fn test_conversion_is_thread_safe() {
    let handles: Vec<_> = PAIRS
        .iter()
        .map(|(ur, gl)| std::thread::spawn(move || merged_form_gloss(ur, gl).unwrap()))
        .collect();

    for (handle, (ur, gl)) in handles.into_iter().zip(PAIRS) {
        assert_eq!(handle.join().unwrap(), merged_form_gloss(ur, gl).unwrap());
    }
}
