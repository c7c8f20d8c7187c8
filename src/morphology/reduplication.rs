// WHY: Reduplication marks aspect; spans are located by the first consonant-vowel pair

use anyhow::Result;
use std::str::FromStr;

use super::is_vowel;

/// Reduplication pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduplicationPattern {
    /// Whole word repeated: `word-word`
    Full,
    /// First syllable of the root repeated, prefix kept in front
    Partial,
    /// `ka` + first syllable repeated: `kagi-gising`
    Recent,
}

impl FromStr for ReduplicationPattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "partial" => Ok(Self::Partial),
            "recent" | "recent-completion" => Ok(Self::Recent),
            other => anyhow::bail!("Unknown reduplication pattern: {other}"),
        }
    }
}

/// Characters up to and including the vowel of the first consonant-vowel pair.
/// Any non-vowel character counts as a consonant.
fn first_cv_span(chars: &[char]) -> Option<&[char]> {
    chars
        .windows(2)
        .position(|pair| !is_vowel(pair[0]) && is_vowel(pair[1]))
        .map(|i| &chars[..i + 2])
}

fn first_two(word: &str) -> String {
    word.chars().take(2).collect()
}

/// Reduplicate `word`. `prefix` is only used by the partial pattern.
pub fn reduplicate(word: &str, pattern: ReduplicationPattern, prefix: &str) -> String {
    match pattern {
        ReduplicationPattern::Full => format!("{word}-{word}"),
        ReduplicationPattern::Partial => {
            let root = if !prefix.is_empty() {
                word.strip_prefix(prefix).unwrap_or(word)
            } else {
                word
            };
            let chars: Vec<char> = root.chars().collect();
            match first_cv_span(&chars) {
                Some(span) => {
                    let span: String = span.iter().collect();
                    format!("{prefix}{span}-{root}")
                }
                None => format!("{}-{word}", first_two(word)),
            }
        }
        ReduplicationPattern::Recent => {
            let chars: Vec<char> = word.chars().collect();
            match first_cv_span(&chars) {
                Some(span) => {
                    let span: String = span.iter().collect();
                    format!("ka{span}-{word}")
                }
                None => format!("ka{}-{word}", first_two(word)),
            }
        }
    }
}

/// Reduplicate by pattern name; unknown names leave the word unchanged
pub fn reduplicate_by_name(word: &str, pattern: &str, prefix: &str) -> String {
    match pattern.parse::<ReduplicationPattern>() {
        Ok(pattern) => reduplicate(word, pattern, prefix),
        Err(_) => word.to_string(),
    }
}
