//! Notation rules: delimiters and the policy for marker-less blocks
//!
//! Rules default to the GGG notation (`{`, `}`, `>`). They can be loaded
//! from YAML; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a block without a substitution marker (e.g. `{ee}`) is read
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BareBlockPolicy {
    /// The whole content is surface material: `{ee}` == `{>ee}`
    #[default]
    Insertion,

    /// The whole content is underlying material: `{ee}` == `{ee>}`
    Deletion,
}

impl BareBlockPolicy {
    /// Split the content of a marker-less block into (underlying, surface)
    pub fn split<'a>(self, content: &'a str) -> (&'a str, &'a str) {
        match self {
            BareBlockPolicy::Insertion => ("", content),
            BareBlockPolicy::Deletion => (content, ""),
        }
    }
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid rules: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NotationRules {
    pub open: char,
    pub close: char,
    /// Separates the underlying side from the surface side of a block
    pub marker: char,
    pub bare_block: BareBlockPolicy,
}

impl Default for NotationRules {
    fn default() -> Self {
        Self {
            open: '{',
            close: '}',
            marker: '>',
            bare_block: BareBlockPolicy::default(),
        }
    }
}

impl NotationRules {
    pub fn from_yaml(text: &str) -> Result<Self, RulesError> {
        let rules: NotationRules = serde_yaml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        log::debug!("Loading notation rules from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Delimiters must be pairwise distinct and visible
    pub fn validate(&self) -> Result<(), RulesError> {
        let delimiters = [("open", self.open), ("close", self.close), ("marker", self.marker)];

        for (name, c) in delimiters {
            if c.is_whitespace() {
                return Err(RulesError::Invalid(format!("{} delimiter is whitespace", name)));
            }
        }

        for (i, (a_name, a)) in delimiters.iter().enumerate() {
            for (b_name, b) in &delimiters[i + 1..] {
                if a == b {
                    return Err(RulesError::Invalid(format!(
                        "{} and {} delimiters are both '{}'",
                        a_name, b_name, a
                    )));
                }
            }
        }

        Ok(())
    }
}
