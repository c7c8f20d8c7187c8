// WHY: Evaluation harness scoring the naturalizer against tables of accepted spellings
// Table I/O is a thin async wrapper; scoring itself is synchronous and pure

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::naturalizer::{EngineConfig, Naturalizer, SourceHint};

/// Bundled reference table: common drug names and their accepted Filipino spellings
pub const REFERENCE_TABLE_TSV: &str = include_str!("../data/drug_names.tsv");

/// A source word with every spelling accepted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationCase {
    pub source: String,
    pub accepted: Vec<String>,
}

/// Ordered table of evaluation cases, one per distinct source word
#[derive(Debug, Clone, Default)]
pub struct EvaluationTable {
    cases: Vec<EvaluationCase>,
    index: HashMap<String, usize>,
}

impl EvaluationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an accepted spelling; repeated sources accumulate alternatives in first-seen order.
    /// Accepted spellings are lower-cased to match the engine's output.
    pub fn push(&mut self, source: impl Into<String>, accepted: impl AsRef<str>) {
        let source = source.into();
        let accepted = accepted.as_ref().to_lowercase();
        match self.index.get(&source) {
            Some(&idx) => {
                let case = &mut self.cases[idx];
                if !case.accepted.contains(&accepted) {
                    case.accepted.push(accepted);
                }
            }
            None => {
                self.index.insert(source.clone(), self.cases.len());
                self.cases.push(EvaluationCase {
                    source,
                    accepted: vec![accepted],
                });
            }
        }
    }

    /// Parse two-column TSV (`source<TAB>accepted`)
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_delimited(content, b'\t')
    }

    /// Parse two-column delimited text. Fields may be double-quoted; blank lines and
    /// `#` comments are skipped; any other row without exactly two columns is an error.
    pub fn parse_delimited(content: &str, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut table = Self::new();
        for result in reader.records() {
            let record = result.context("Failed to read evaluation row")?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            if record.len() != 2 {
                let line = record.position().map_or(0, |pos| pos.line());
                anyhow::bail!(
                    "Malformed evaluation row at line {}: expected 2 columns, found {}",
                    line,
                    record.len()
                );
            }

            table.push(&record[0], &record[1]);
        }

        Ok(table)
    }

    /// The bundled drug-name table
    pub fn reference() -> Result<Self> {
        Self::parse(REFERENCE_TABLE_TSV).context("Failed to parse bundled reference table")
    }

    /// Read and parse a table from disk; `.tsv` files are tab-separated, anything else
    /// comma-separated
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read evaluation table {}", path.display()))?;
        let table = Self::parse_delimited(&content, delimiter_for(path))
            .with_context(|| format!("Failed to parse evaluation table {}", path.display()))?;
        info!(path = %path.display(), cases = table.len(), "Loaded evaluation table");
        Ok(table)
    }

    pub fn cases(&self) -> &[EvaluationCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Field delimiter for a table file, chosen by extension
pub fn delimiter_for(path: &Path) -> u8 {
    let tab_separated = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    if tab_separated {
        b'\t'
    } else {
        b','
    }
}

/// Harness settings
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    pub source_hint: SourceHint,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            source_hint: SourceHint::English,
        }
    }
}

/// Outcome for a single source word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationRecord {
    pub input: String,
    pub expected: Vec<String>,
    pub actual: String,
    pub matched: bool,
}

impl EvaluationRecord {
    /// `input -> expected ? actual : match_boolean`
    pub fn report_line(&self) -> String {
        format!(
            "{} -> {} ? {} : {}",
            self.input,
            self.expected.join(", "),
            self.actual,
            self.matched
        )
    }
}

/// Summary counts.
///
/// `precision` is computed exactly like `accuracy` (TP / (TP + FP)); the harness
/// never separates false negatives from false discoveries, so the two always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationMetrics {
    pub true_positives: usize,
    pub false_positives: usize,
    pub accuracy: f64,
    pub precision: f64,
}

impl EvaluationMetrics {
    pub fn from_counts(true_positives: usize, false_positives: usize) -> Self {
        let total = true_positives + false_positives;
        let ratio = if total == 0 {
            0.0
        } else {
            true_positives as f64 / total as f64
        };
        Self {
            true_positives,
            false_positives,
            accuracy: ratio,
            precision: ratio,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives
    }

    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy * 100.0
    }
}

/// Full harness result
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub source_hint: SourceHint,
    /// Switches of the engine that produced the records
    pub engine: EngineConfig,
    pub records: Vec<EvaluationRecord>,
    pub metrics: EvaluationMetrics,
}

impl EvaluationReport {
    /// Report lines followed by the summary counts
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.report_line());
            out.push('\n');
        }
        out.push_str(&format!("Trues: {:>10}\n", self.metrics.true_positives));
        out.push_str(&format!("Falses: {:>10}\n", self.metrics.false_positives));
        out.push_str(&format!("Accuracy: {:>7.2}%\n", self.metrics.accuracy_percent()));
        out.push_str(&format!("Precision: {:>7.2}%\n", self.metrics.precision * 100.0));
        out
    }

    /// Write the rendered report to `path`
    pub async fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .await
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }

    /// Write metrics and records as pretty JSON to `path`
    pub async fn write_stats_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats {}", path.display()))?;
        Ok(())
    }
}

/// Score every case, calling `on_record` after each one
pub fn evaluate_with<F>(
    engine: &Naturalizer,
    table: &EvaluationTable,
    config: &EvaluationConfig,
    mut on_record: F,
) -> EvaluationReport
where
    F: FnMut(&EvaluationRecord),
{
    let mut records = Vec::with_capacity(table.len());
    let mut true_positives = 0;
    let mut false_positives = 0;

    for case in table.cases() {
        let actual = engine.naturalize(&case.source, config.source_hint);
        let matched = case.accepted.contains(&actual);
        if matched {
            true_positives += 1;
        } else {
            false_positives += 1;
            debug!(input = %case.source, actual = %actual, expected = ?case.accepted, "Mismatch");
        }

        let record = EvaluationRecord {
            input: case.source.clone(),
            expected: case.accepted.clone(),
            actual,
            matched,
        };
        on_record(&record);
        records.push(record);
    }

    let metrics = EvaluationMetrics::from_counts(true_positives, false_positives);
    info!(
        cases = metrics.total(),
        true_positives,
        false_positives,
        accuracy = metrics.accuracy,
        "Evaluation complete"
    );

    EvaluationReport {
        source_hint: config.source_hint,
        engine: *engine.config(),
        records,
        metrics,
    }
}

/// Score every case in the table
pub fn evaluate(
    engine: &Naturalizer,
    table: &EvaluationTable,
    config: &EvaluationConfig,
) -> EvaluationReport {
    evaluate_with(engine, table, config, |_| {})
}
