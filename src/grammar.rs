// WHY: Structural rules written as `LEFT -> RIGHT1 RIGHT2 ...`, e.g. `S -> NP VP`

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

const ARROW: &str = "->";

/// A context-free production
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrammarRule {
    pub left: String,
    pub right: Vec<String>,
}

impl GrammarRule {
    /// Parse a rule; the arrow must appear exactly once
    pub fn parse(rule: &str) -> Result<Self> {
        let parts: Vec<&str> = rule.split(ARROW).collect();
        if parts.len() != 2 {
            anyhow::bail!("Invalid grammar rule (expected exactly one '{ARROW}'): {rule}");
        }

        Ok(Self {
            left: parts[0].trim().to_string(),
            right: parts[1].split_whitespace().map(str::to_string).collect(),
        })
    }
}

impl FromStr for GrammarRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {ARROW}", self.left)?;
        for symbol in &self.right {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}
