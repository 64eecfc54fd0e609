//! Data models shared by the parsers, aligner and tagger

pub mod record;
pub mod rules;
pub mod segment;

// Re-export commonly used types
pub use record::{CharacterRecord, Op, Tag};
pub use rules::{BareBlockPolicy, NotationRules, RulesError};
pub use segment::{MorphemeUnit, Segment};
