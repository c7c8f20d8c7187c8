pub mod evaluation;
pub mod grammar;
pub mod morphology;
pub mod naturalizer;

// Re-export main types for convenient access
pub use naturalizer::{EngineConfig, NaturalizationTrace, Naturalizer, SourceHint};

// Re-export morphology helpers
pub use morphology::{
    affix, affix_by_name, agree_particle, ligature, reduplicate,
    AffixTag, Particle, ReduplicationPattern
};

// Re-export evaluation harness types
pub use evaluation::{
    evaluate, evaluate_with, EvaluationConfig, EvaluationMetrics,
    EvaluationRecord, EvaluationReport, EvaluationTable
};

pub use grammar::GrammarRule;
