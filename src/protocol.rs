use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calculations::split_mapping::MappingError;

const REST_LABEL: &str = "Rest";

/// One entry of a training split: either a named training block or a rest day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Protocol {
    Rest,
    Named(String),
}

impl Protocol {
    /// Parse a split label. "rest" in any casing becomes [`Protocol::Rest`];
    /// empty or whitespace-only labels are rejected.
    pub fn parse(label: &str) -> Result<Self, MappingError> {
        if label.trim().is_empty() {
            return Err(MappingError::InvalidLabel {
                position: None,
                label: label.to_string(),
            });
        }
        if label.eq_ignore_ascii_case(REST_LABEL) {
            Ok(Protocol::Rest)
        } else {
            Ok(Protocol::Named(label.to_string()))
        }
    }

    pub fn named(label: impl Into<String>) -> Self {
        Protocol::Named(label.into())
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Protocol::Rest)
    }

    pub fn label(&self) -> &str {
        match self {
            Protocol::Rest => REST_LABEL,
            Protocol::Named(label) => label,
        }
    }

    /// Parse a whole split, reporting the position of the first unusable label.
    pub fn parse_split<I, S>(labels: I) -> Result<Vec<Protocol>, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| {
                Protocol::parse(label.as_ref()).map_err(|err| err.at_position(position))
            })
            .collect()
    }

    /// Beginner-facing full body athletic split used when none is configured.
    pub fn default_split() -> Vec<Protocol> {
        vec![
            Protocol::named("Full body posture correction"),
            Protocol::named("Full body mobility"),
            Protocol::Rest,
            Protocol::named("Full body HIIT"),
            Protocol::named("Functional core"),
            Protocol::Rest,
            Protocol::named("Full body strength"),
            Protocol::named("Full body flexibility"),
            Protocol::Rest,
        ]
    }
}

impl FromStr for Protocol {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::parse(s)
    }
}

impl TryFrom<String> for Protocol {
    type Error = MappingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Protocol::parse(&value)
    }
}

impl From<Protocol> for String {
    fn from(value: Protocol) -> Self {
        match value {
            Protocol::Rest => REST_LABEL.to_string(),
            Protocol::Named(label) => label,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
