// WHY: Sound-conditioned linkers: the na/-ng ligature and the din/rin enclitic

use std::fmt;

use super::is_vowel;

/// Trailing punctuation ignored when inspecting the previous word
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Join an adjective and a noun with the ligature its final sound selects
pub fn ligature(adjective: &str, noun: &str) -> String {
    let last = adjective.chars().last().and_then(|ch| ch.to_lowercase().next());
    match last {
        Some(ch) if is_vowel(ch) => format!("{adjective}ng {noun}"),
        Some('n') => format!("{adjective}g {noun}"),
        _ => format!("{adjective} na {noun}"),
    }
}

/// The din/rin enclitic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Particle {
    Rin,
    #[default]
    Din,
}

impl Particle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rin => "rin",
            Self::Din => "din",
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Pick `rin` after a vowel, `y` or `w`, otherwise `din`.
/// A word that is empty after stripping punctuation yields the default, `din`.
pub fn agree_particle(prev_word: &str) -> Particle {
    let stripped = prev_word.trim_end_matches(TRAILING_PUNCTUATION);
    match stripped.chars().last().and_then(|ch| ch.to_lowercase().next()) {
        Some(ch) if is_vowel(ch) || ch == 'y' || ch == 'w' => Particle::Rin,
        Some(_) => Particle::Din,
        None => Particle::default(),
    }
}
