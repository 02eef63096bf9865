//! Evaluation mode shared by every transition of a rule set.

use loam_core::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How a rule set's transitions are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Transitions are positional neighbourhood templates.
    Pattern,
    /// Transitions count neighbours in a set of states of interest.
    Threshold,
}

impl Mode {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Threshold => "threshold",
        }
    }

    /// Derive the mode from a rule file's tag list.
    ///
    /// Rule files mark pattern rules with a `"patterns"` tag; anything
    /// else is a threshold rule.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        if tags.iter().any(|t| t.as_ref() == "patterns") {
            Self::Pattern
        } else {
            Self::Threshold
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" | "patterns" => Ok(Self::Pattern),
            "threshold" | "count" | "counts" => Ok(Self::Threshold),
            _ => Err(ConfigError::UnknownMode { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
