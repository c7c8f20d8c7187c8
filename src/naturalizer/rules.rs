// WHY: Rewrite rules are data, applied by a single fold so their order is explicit
// Each rule sees the whole output of the rule before it and is never reapplied

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use tracing::trace;

use super::SourceHint;

/// Signature of a positional pass over the current string
pub type PassFn = fn(&str) -> String;

/// One step of the naturalization pipeline
#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Plain substring replacement, non-overlapping, left to right
    Literal { from: String, to: String },
    /// Regex replacement; `replacement` may reference groups as `${1}`
    Pattern {
        source: &'static str,
        regex: Regex,
        replacement: &'static str,
    },
    /// Hand-written scan for contexts the regex engine cannot express (lookaround, back-references)
    Pass { name: &'static str, apply: PassFn },
}

impl RewriteRule {
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Literal {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Compile a regex rule
    pub fn pattern(source: &'static str, replacement: &'static str) -> Result<Self> {
        let regex = Regex::new(source)
            .with_context(|| format!("Failed to compile rewrite pattern: {source}"))?;
        Ok(Self::Pattern {
            source,
            regex,
            replacement,
        })
    }

    pub fn pass(name: &'static str, apply: PassFn) -> Self {
        Self::Pass { name, apply }
    }

    /// Apply this rule once over the entire input
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Literal { from, to } => {
                if from.is_empty() {
                    input.to_string()
                } else {
                    input.replace(from.as_str(), to)
                }
            }
            Self::Pattern {
                regex, replacement, ..
            } => replace_all(regex, input, replacement),
            Self::Pass { apply, .. } => apply(input),
        }
    }

    /// Short human-readable description, shown for rules that fire in a trace
    pub fn describe(&self) -> String {
        match self {
            Self::Literal { from, to } => format!("{from} -> {to}"),
            Self::Pattern {
                source,
                replacement,
                ..
            } => format!("/{source}/ -> {replacement}"),
            Self::Pass { name, .. } => format!("pass:{name}"),
        }
    }
}

/// Replace every leftmost-first, non-overlapping match, interpolating capture groups
fn replace_all(regex: &Regex, haystack: &str, replacement: &str) -> String {
    let mut output = String::with_capacity(haystack.len() + 8);
    let mut last_end = 0;

    for caps in regex.captures_iter(haystack) {
        let Some(m) = caps.get_match() else {
            continue;
        };
        output.push_str(&haystack[last_end..m.start()]);
        caps.interpolate_string_into(haystack, replacement, &mut output);
        last_end = m.end();
    }

    output.push_str(&haystack[last_end..]);
    output
}

/// Which source hints activate a rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Runs for every hint
    Always,
    /// Runs for `spanish` and `auto`
    Spanish,
    /// Runs for `english` and `auto`
    English,
}

impl RuleScope {
    pub fn admits(self, hint: SourceHint) -> bool {
        match self {
            Self::Always => true,
            Self::Spanish => matches!(hint, SourceHint::Spanish | SourceHint::Auto),
            Self::English => matches!(hint, SourceHint::English | SourceHint::Auto),
        }
    }
}

/// A named, ordered group of rules forming one phase of the pipeline
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: &'static str,
    pub scope: RuleScope,
    /// Dormant sets stay in the pipeline table but never run
    pub enabled: bool,
    pub rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(name: &'static str, scope: RuleScope, rules: Vec<RewriteRule>) -> Self {
        Self {
            name,
            scope,
            enabled: true,
            rules,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether this set runs for the given hint
    pub fn is_active(&self, hint: SourceHint) -> bool {
        self.enabled && self.scope.admits(hint)
    }

    /// Fold every rule over the input in listed order
    pub fn apply(&self, input: String) -> String {
        self.rules.iter().fold(input, |current, rule| rule.apply(&current))
    }

    /// Like [`RuleSet::apply`], also returning the description of every rule
    /// that changed the string, in firing order
    pub fn apply_recording(&self, input: String) -> (String, Vec<String>) {
        let mut fired = Vec::new();
        let output = self.rules.iter().fold(input, |current, rule| {
            let next = rule.apply(&current);
            if next != current {
                let description = rule.describe();
                trace!(phase = self.name, rule = %description, from = %current, to = %next, "Rule fired");
                fired.push(description);
            }
            next
        });
        (output, fired)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
