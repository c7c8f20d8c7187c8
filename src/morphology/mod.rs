// WHY: Morphological helpers applied to naturalized output or to native roots
// All helpers are total string functions with no shared state

pub mod affixes;
pub mod agreement;
pub mod reduplication;

pub use affixes::{affix, affix_by_name, AffixTag};
pub use agreement::{agree_particle, ligature, Particle};
pub use reduplication::{reduplicate, reduplicate_by_name, ReduplicationPattern};

/// Filipino vowel letters
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

#[inline]
pub(crate) fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}
