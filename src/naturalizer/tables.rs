// WHY: Fixed rule tables for Filipino orthographic naturalization
// Table order is the pipeline order; moving a rule changes real outputs

use anyhow::Result;

use super::passes;
use super::rules::{RewriteRule, RuleScope, RuleSet};

/// Digraph and phoneme substitutions, applied as plain replacements
pub const PHONEME_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ph", "f"),   // phone -> fon
    ("ps", "s"),   // psychology -> sikolohiya
    ("v", "b"),    // verde -> berde
    ("j", "dy"),   // jeep -> dyip
    ("z", "s"),    // zipon -> sipon
    ("ñ", "ny"),   // baño -> banyo
    ("qu", "kuw"), // queen -> kwin
];

/// Spanish-specific patterns. Kept in the pipeline table but dormant unless
/// `EngineConfig::spanish_rules` is set.
pub const SPANISH_PATTERNS: &[(&str, &str)] = &[
    ("é", "e"),
    ("á", "a"),
    ("cion$", "syon"),
    ("tion$", "syon"),
    ("gobierno", "gobyerno"),
    ("bie", "biye"),
    ("ci([eo])", "sy${1}"),
    ("ce", "se"),
    ("ci", "si"),
    ("o e", "u"),  // como está -> kumusta
    ("^ko", "ku"),
];

/// e/i and o/u allophone shifts, dormant unless `EngineConfig::vowel_shifts` is set
pub const VOWEL_SHIFTS: &[(&str, &str)] = &[("ee", "i"), ("oo", "u")];

/// Word-final English suffixes. `ter` maps to itself.
pub const ENGLISH_SUFFIXES: &[(&str, &str)] = &[
    ("tion$", "syon"),
    ("sion$", "syon"),
    ("ture$", "tyur"),
    ("ter$", "ter"),
    ("ble$", "bol"),
];

/// Consonants whose triple runs collapse in the final phase
pub const TRIPLE_CONSONANTS: &str = "bdfghjklmnpqrstvwxz";

/// English loanwords whose spelling does not predict their pronunciation
pub const IRREGULAR_LOANWORDS: &[(&str, &str)] = &[
    ("computer", "kompyuter"),
    ("facebook", "peysbok"),
];

fn literals(table: &[(&str, &str)]) -> Vec<RewriteRule> {
    table
        .iter()
        .map(|&(from, to)| RewriteRule::literal(from, to))
        .collect()
}

fn patterns(table: &[(&'static str, &'static str)]) -> Result<Vec<RewriteRule>> {
    table
        .iter()
        .map(|&(source, replacement)| RewriteRule::pattern(source, replacement))
        .collect()
}

/// Build the complete ordered pipeline. Dormant sets are included but disabled.
pub fn build_pipeline(spanish_rules: bool, vowel_shifts: bool) -> Result<Vec<RuleSet>> {
    let pipeline = vec![
        RuleSet::new("digraphs", RuleScope::Always, literals(PHONEME_SUBSTITUTIONS)),
        RuleSet::new(
            "letter-x",
            RuleScope::Always,
            vec![
                RewriteRule::pass("y-after-x", passes::y_after_x),
                RewriteRule::pattern("^x", "s")?,
                RewriteRule::literal("x", "ks"),
            ],
        ),
        RuleSet::new(
            "y-context",
            RuleScope::Always,
            vec![
                RewriteRule::pass("y-before-s", passes::y_before_s),
                RewriteRule::pass("y-before-l", passes::y_before_l),
            ],
        ),
        RuleSet::new(
            "c-sound",
            RuleScope::Always,
            vec![
                RewriteRule::pattern("c([eyi])", "s${1}")?,
                RewriteRule::literal("c", "k"),
                RewriteRule::literal("kh", "k"),
            ],
        ),
        RuleSet::new(
            "y-diphthong",
            RuleScope::Always,
            vec![
                RewriteRule::literal("y", "ay"),
                RewriteRule::pass("y-without-a", passes::y_without_a),
            ],
        ),
        RuleSet::new(
            "suffixes",
            RuleScope::Always,
            patterns(&[("ate$", "eyt"), ("ide$", "ayd"), ("one$", "own"), ("e$", "")])?,
        ),
        RuleSet::new(
            "th",
            RuleScope::Always,
            literals(&[("thion", "tayon"), ("th", "t")]),
        ),
        RuleSet::new(
            "double-letters",
            RuleScope::Always,
            vec![RewriteRule::pass("collapse-doubles", passes::collapse_doubles)],
        ),
        RuleSet::new("ein", RuleScope::Always, literals(&[("ein", "in")])),
        RuleSet::new(
            "vowel-hiatus",
            RuleScope::Always,
            vec![
                RewriteRule::pass("o-vowel-glide", passes::o_vowel_glide),
                RewriteRule::pattern("i([aeiou])", "iy${1}")?,
                RewriteRule::literal("eu", "u"),
                RewriteRule::literal("ee", "i"),
                RewriteRule::literal("oo", "u"),
            ],
        ),
        RuleSet::new("spanish", RuleScope::Spanish, patterns(SPANISH_PATTERNS)?)
            .with_enabled(spanish_rules),
        RuleSet::new("vowel-shifts", RuleScope::Always, literals(VOWEL_SHIFTS))
            .with_enabled(vowel_shifts),
        RuleSet::new("english-suffixes", RuleScope::English, patterns(ENGLISH_SUFFIXES)?),
        RuleSet::new(
            "triple-consonants",
            RuleScope::Always,
            TRIPLE_CONSONANTS
                .chars()
                .map(|c| RewriteRule::literal(c.to_string().repeat(3), c.to_string()))
                .collect(),
        ),
    ];

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order_is_fixed() {
        let pipeline = build_pipeline(false, false).unwrap();
        let names: Vec<_> = pipeline.iter().map(|set| set.name).collect();
        assert_eq!(
            names,
            [
                "digraphs",
                "letter-x",
                "y-context",
                "c-sound",
                "y-diphthong",
                "suffixes",
                "th",
                "double-letters",
                "ein",
                "vowel-hiatus",
                "spanish",
                "vowel-shifts",
                "english-suffixes",
                "triple-consonants",
            ]
        );
    }

    #[test]
    fn test_dormant_tables_are_present_but_disabled() {
        let pipeline = build_pipeline(false, false).unwrap();
        let spanish = pipeline.iter().find(|set| set.name == "spanish").unwrap();
        assert!(!spanish.enabled);
        assert_eq!(spanish.len(), SPANISH_PATTERNS.len());

        let shifts = pipeline.iter().find(|set| set.name == "vowel-shifts").unwrap();
        assert!(!shifts.enabled);
    }

    #[test]
    fn test_triple_consonant_rules_cover_every_listed_letter() {
        let pipeline = build_pipeline(false, false).unwrap();
        let triples = pipeline.last().unwrap();
        assert_eq!(triples.len(), TRIPLE_CONSONANTS.len());
        assert_eq!(triples.apply("buzzz".to_string()), "buz");
    }
}
