use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use salita::evaluation::{evaluate_with, EvaluationConfig, EvaluationTable};
use salita::morphology::{affix_by_name, agree_particle, ligature, reduplicate_by_name};
use salita::naturalizer::{EngineConfig, Naturalizer, SourceHint};

#[derive(Parser, Debug)]
#[command(name = "salita")]
#[command(about = "Naturalize Spanish and English loanwords into Filipino orthography")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// Engine switches shared by the commands that naturalize
#[derive(clap::Args, Debug, Clone)]
struct EngineArgs {
    /// Run the dormant Spanish-specific rule table for spanish/auto hints
    #[arg(long)]
    spanish_rules: bool,

    /// Run the dormant ee/oo vowel-shift table
    #[arg(long)]
    vowel_shifts: bool,

    /// Skip the irregular-loanword lexicon
    #[arg(long)]
    no_lexicon: bool,
}

impl EngineArgs {
    fn to_config(&self) -> EngineConfig {
        EngineConfig {
            spanish_rules: self.spanish_rules,
            vowel_shifts: self.vowel_shifts,
            irregular_lexicon: !self.no_lexicon,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Naturalize one or more words
    Naturalize {
        /// Words to naturalize
        #[arg(required = true)]
        words: Vec<String>,

        /// Source language hint: spanish, english or auto
        #[arg(long, default_value = "auto")]
        hint: SourceHint,

        /// Print the output of every pipeline phase
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Attach a Filipino affix to a root (mag, nag, um, in, an, pag, i, ka, pang)
    Affix { root: String, tag: String },

    /// Reduplicate a word (full, partial, recent)
    Reduplicate {
        word: String,
        pattern: String,

        /// Prefix to skip before the reduplicated syllable (partial only)
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Join an adjective and a noun with the matching ligature
    Ligature { adjective: String, noun: String },

    /// Pick din or rin after the given word
    Particle { prev_word: String },

    /// Score the naturalizer against a table of accepted spellings
    Evaluate {
        /// Two-column table (source, accepted): tab-separated for .tsv, comma-separated otherwise.
        /// Defaults to the bundled drug-name table
        #[arg(long)]
        table: Option<PathBuf>,

        /// Text report output path
        #[arg(long, default_value = "naturalization_results.txt")]
        out: PathBuf,

        /// Optional JSON stats output path
        #[arg(long)]
        stats_out: Option<PathBuf>,

        /// Source language hint used for every entry
        #[arg(long, default_value = "english")]
        hint: SourceHint,

        /// Suppress the console progress bar
        #[arg(long)]
        no_progress: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the demonstration tables
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Naturalize {
            words,
            hint,
            trace,
            engine,
        } => {
            let naturalizer = Naturalizer::new(engine.to_config())?;
            for word in &words {
                if trace {
                    let trace = naturalizer.trace(word, hint);
                    println!("{word}");
                    println!("  {:<18} {}", "lowercase", trace.input);
                    for step in &trace.steps {
                        println!("  {:<18} {}", step.phase, step.output);
                        for rule in &step.rules {
                            println!("  {:<18}   {rule}", "");
                        }
                    }
                } else {
                    println!("{word} -> {}", naturalizer.naturalize(word, hint));
                }
            }
        }
        Command::Affix { root, tag } => println!("{}", affix_by_name(&root, &tag)),
        Command::Reduplicate {
            word,
            pattern,
            prefix,
        } => println!("{}", reduplicate_by_name(&word, &pattern, &prefix)),
        Command::Ligature { adjective, noun } => println!("{}", ligature(&adjective, &noun)),
        Command::Particle { prev_word } => {
            println!("{prev_word} {}", agree_particle(&prev_word))
        }
        Command::Evaluate {
            table,
            out,
            stats_out,
            hint,
            no_progress,
            engine,
        } => {
            let naturalizer = Naturalizer::new(engine.to_config())?;
            let table = match table {
                Some(path) => EvaluationTable::load(&path).await?,
                None => EvaluationTable::reference()?,
            };

            let progress = if no_progress {
                ProgressBar::hidden()
            } else {
                let bar = ProgressBar::new(table.len() as u64);
                bar.set_style(
                    ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?
                        .progress_chars("=> "),
                );
                bar
            };

            let config = EvaluationConfig { source_hint: hint };
            let report = evaluate_with(&naturalizer, &table, &config, |record| {
                progress.set_message(record.input.clone());
                progress.inc(1);
            });
            progress.finish_and_clear();

            report.write_text(&out).await?;
            print!("{}", report.render());
            info!("Report written to {}", out.display());

            if let Some(stats_path) = stats_out {
                report.write_stats_json(&stats_path).await?;
                info!("Stats written to {}", stats_path.display());
            }
        }
        Command::Demo => demo::run()?,
    }

    Ok(())
}

mod demo {
    use anyhow::Result;
    use salita::morphology::{affix_by_name, agree_particle, ligature, reduplicate_by_name};
    use salita::naturalizer::{Naturalizer, SourceHint};

    fn mark(ok: bool) -> &'static str {
        if ok {
            "✓"
        } else {
            "✗"
        }
    }

    pub fn run() -> Result<()> {
        let engine = Naturalizer::shared()?;
        let rule = "=".repeat(70);

        println!("{rule}");
        println!("FILIPINO NATURALIZATION");
        println!("{rule}");

        println!("\n1. SPANISH LOANWORDS -> FILIPINO:");
        for (word, expected) in [
            ("teléfono", "telepono"),
            ("verde", "berde"),
            ("chocolate", "tsokolate"),
            ("jeep", "dyip"),
            ("zipon", "sipon"),
            ("baño", "banyo"),
            ("examen", "eksamen"),
            ("centro", "sentro"),
            ("como está", "kumusta"),
            ("gobierno", "gobyerno"),
            ("educacion", "edukasyon"),
        ] {
            let result = engine.naturalize(word, SourceHint::Spanish);
            println!("   {} {word:15} → {result:15} (expected: {expected})", mark(result == expected));
        }

        println!("\n2. ENGLISH LOANWORDS -> FILIPINO:");
        for word in ["computer", "facebook", "television", "education"] {
            println!("   {word:15} → {}", engine.naturalize(word, SourceHint::English));
        }

        println!("\n3. AFFIXATION (Verb Focus):");
        for (root, tag, description) in [
            ("aral", "mag", "mag-aral (to study)"),
            ("aral", "nag", "nag-aral (studied)"),
            ("kain", "um", "kumain (ate)"),
            ("sulat", "in", "sulat-in (to be written)"),
        ] {
            let result = affix_by_name(root, tag);
            println!("   {root} + {tag:3} → {result:15} ({description})");
        }

        println!("\n4. REDUPLICATION (Recent Completion - ka-):");
        for (root, expected, meaning) in [
            ("gising", "kagigising", "just woke up"),
            ("sulat", "kasusulat", "just wrote"),
            ("tapos", "katatapos", "just finished"),
        ] {
            let result = reduplicate_by_name(root, "recent", "");
            let ok = result.replace('-', "") == expected;
            println!("   {} {root:10} → {result:15} (expected: {expected}) = {meaning}", mark(ok));
        }

        println!("\n5. LIGATURES (Adjective-Noun):");
        for (adjective, noun, expected, meaning) in [
            ("maganda", "bahay", "magandang bahay", "beautiful house"),
            ("malinis", "silid", "malinis na silid", "clean room"),
            ("magaan", "aklat", "magaang aklat", "light book"),
        ] {
            let result = ligature(adjective, noun);
            println!("   {} {adjective} + {noun:6} → {result:20} ({meaning})", mark(result == expected));
        }

        println!("\n6. ENCLITIC PARTICLES (din/rin):");
        for (prev, expected) in [("ako", "rin"), ("Juan", "din"), ("mahirap", "din"), ("wala pa", "rin")] {
            let particle = agree_particle(prev);
            println!("   {} {prev:10} + {particle:4} → {prev} {particle}", mark(particle.as_str() == expected));
        }

        println!("\n{rule}");
        Ok(())
    }
}
