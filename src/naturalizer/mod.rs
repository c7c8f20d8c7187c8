// WHY: Naturalization engine turning foreign-origin words into Filipino spelling
// The pipeline is compiled once and shared; every call is a pure fold over it

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info};

pub mod passes;
pub mod rules;
pub mod tables;

pub use rules::{RewriteRule, RuleScope, RuleSet};

/// Language the loanword is borrowed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHint {
    Spanish,
    English,
    #[default]
    Auto,
}

impl SourceHint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spanish => "spanish",
            Self::English => "english",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for SourceHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SourceHint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "spanish" | "es" => Ok(Self::Spanish),
            "english" | "en" => Ok(Self::English),
            "auto" => Ok(Self::Auto),
            other => anyhow::bail!("Unknown source hint: {other} (expected spanish, english or auto)"),
        }
    }
}

/// Engine switches; the default reproduces the reference behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    /// Run the Spanish-specific table for `spanish`/`auto` hints
    pub spanish_rules: bool,
    /// Run the ee/oo vowel-shift table
    pub vowel_shifts: bool,
    /// Look up irregular English loanwords before the rule pipeline
    pub irregular_lexicon: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spanish_rules: false,
            vowel_shifts: false,
            irregular_lexicon: true,
        }
    }
}

/// One phase output recorded by [`Naturalizer::trace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub phase: &'static str,
    pub output: String,
    /// Descriptions of the rules that changed the word during this phase
    pub rules: Vec<String>,
}

/// Lower-cased input plus the output of every phase that ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalizationTrace {
    pub input: String,
    pub steps: Vec<TraceStep>,
}

impl NaturalizationTrace {
    /// Final output; the lower-cased input when no phase ran
    pub fn output(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.output.as_str())
            .unwrap_or(&self.input)
    }

    /// Output recorded for a named phase, if it ran
    pub fn phase(&self, name: &str) -> Option<&str> {
        self.steps
            .iter()
            .find(|step| step.phase == name)
            .map(|step| step.output.as_str())
    }
}

const LEXICON_PHASE: &str = "irregular-lexicon";

static SHARED: OnceLock<Naturalizer> = OnceLock::new();

/// Ordered rewrite pipeline mapping loanwords to Filipino orthography
#[derive(Debug, Clone)]
pub struct Naturalizer {
    config: EngineConfig,
    pipeline: Vec<RuleSet>,
    lexicon: HashMap<&'static str, &'static str>,
}

impl Naturalizer {
    /// Compile the rule tables under the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        let pipeline = tables::build_pipeline(config.spanish_rules, config.vowel_shifts)?;
        let lexicon = tables::IRREGULAR_LOANWORDS.iter().copied().collect();

        info!(
            phases = pipeline.len(),
            rules = pipeline.iter().map(RuleSet::len).sum::<usize>(),
            spanish_rules = config.spanish_rules,
            vowel_shifts = config.vowel_shifts,
            irregular_lexicon = config.irregular_lexicon,
            "Compiled naturalization pipeline"
        );

        Ok(Self {
            config,
            pipeline,
            lexicon,
        })
    }

    /// Engine with the reference configuration
    pub fn with_default_rules() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Process-wide default engine, compiled on first use
    pub fn shared() -> Result<&'static Naturalizer> {
        if let Some(engine) = SHARED.get() {
            return Ok(engine);
        }
        let engine = Self::with_default_rules()?;
        Ok(SHARED.get_or_init(|| engine))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All rule sets in pipeline order, dormant ones included
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.pipeline
    }

    fn irregular(&self, lowered: &str, hint: SourceHint) -> Option<&'static str> {
        if !self.config.irregular_lexicon || !RuleScope::English.admits(hint) {
            return None;
        }
        self.lexicon.get(lowered).copied()
    }

    /// Naturalize a word. Total: any input, including the empty string, yields a string.
    pub fn naturalize(&self, word: &str, hint: SourceHint) -> String {
        let lowered = word.to_lowercase();

        if let Some(form) = self.irregular(&lowered, hint) {
            debug!(word, form, "Irregular loanword");
            return form.to_string();
        }

        let result = self
            .pipeline
            .iter()
            .filter(|set| set.is_active(hint))
            .fold(lowered, |current, set| set.apply(current));

        debug!(word, %hint, result = %result, "Naturalized");
        result
    }

    /// Naturalize while recording each phase's output
    pub fn trace(&self, word: &str, hint: SourceHint) -> NaturalizationTrace {
        let input = word.to_lowercase();
        let mut steps = Vec::new();

        if let Some(form) = self.irregular(&input, hint) {
            steps.push(TraceStep {
                phase: LEXICON_PHASE,
                output: form.to_string(),
                rules: vec![format!("{input} -> {form}")],
            });
            return NaturalizationTrace { input, steps };
        }

        let mut current = input.clone();
        for set in self.pipeline.iter().filter(|set| set.is_active(hint)) {
            let (output, rules) = set.apply_recording(current);
            debug!(phase = set.name, output = %output, fired = rules.len(), "Phase applied");
            current = output;
            steps.push(TraceStep {
                phase: set.name,
                output: current.clone(),
                rules,
            });
        }

        NaturalizationTrace { input, steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> &'static Naturalizer {
        Naturalizer::shared().unwrap()
    }

    #[test]
    fn test_reference_fixed_points() {
        let engine = engine();
        assert_eq!(engine.naturalize("centro", SourceHint::English), "sentro");
        assert_eq!(engine.naturalize("computer", SourceHint::English), "kompyuter");
        assert_eq!(engine.naturalize("Acyclovir", SourceHint::English), "asayklobir");
    }

    #[test]
    fn test_empty_and_letterless_inputs() {
        let engine = engine();
        assert_eq!(engine.naturalize("", SourceHint::Auto), "");
        assert_eq!(engine.naturalize("123", SourceHint::Auto), "123");
        assert_eq!(engine.naturalize("!!!", SourceHint::English), "!!");
    }

    #[test]
    fn test_lexicon_respects_hint_and_config() {
        let engine = engine();
        assert_eq!(engine.naturalize("computer", SourceHint::Spanish), "komputer");

        let plain = Naturalizer::new(EngineConfig {
            irregular_lexicon: false,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(plain.naturalize("computer", SourceHint::English), "komputer");
    }

    #[test]
    fn test_trace_matches_naturalize() {
        let engine = engine();
        for word in ["baño", "Hydrochlorothiazide", "pyrantel pamoate", ""] {
            let trace = engine.trace(word, SourceHint::Auto);
            assert_eq!(trace.output(), engine.naturalize(word, SourceHint::Auto));
        }
    }

    #[test]
    fn test_trace_records_digraph_phase() {
        let trace = engine().trace("baño", SourceHint::Auto);
        assert_eq!(trace.input, "baño");
        assert_eq!(trace.phase("digraphs"), Some("banyo"));
        assert_eq!(trace.output(), "banayo");
        assert_eq!(trace.phase("spanish"), None);
    }

    #[test]
    fn test_trace_lists_fired_rules() {
        let trace = engine().trace("centro", SourceHint::English);
        let step = trace
            .steps
            .iter()
            .find(|step| step.phase == "c-sound")
            .unwrap();
        assert_eq!(step.output, "sentro");
        assert_eq!(step.rules, vec!["/c([eyi])/ -> s${1}"]);

        let digraphs = trace.steps.iter().find(|step| step.phase == "digraphs").unwrap();
        assert!(digraphs.rules.is_empty());

        let lexicon = engine().trace("Computer", SourceHint::English);
        assert_eq!(lexicon.steps.len(), 1);
        assert_eq!(lexicon.steps[0].rules, vec!["computer -> kompyuter"]);
    }

    #[test]
    fn test_source_hint_parsing() {
        assert_eq!("English".parse::<SourceHint>().unwrap(), SourceHint::English);
        assert_eq!("es".parse::<SourceHint>().unwrap(), SourceHint::Spanish);
        assert_eq!(" auto ".parse::<SourceHint>().unwrap(), SourceHint::Auto);
        assert!("tagalog".parse::<SourceHint>().is_err());
        assert_eq!(SourceHint::default().to_string(), "auto");
    }
}
