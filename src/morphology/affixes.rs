// WHY: Filipino verbal and nominal affixation (focus and aspect markers)

use anyhow::Result;
use std::str::FromStr;

use super::is_vowel;

/// Affix attached to a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixTag {
    /// `mag-`: actor focus (mag-aral)
    ActorFocus,
    /// `nag-`: completed actor focus (nag-aral)
    CompletedActorFocus,
    /// `-um-`: actor focus infix (kumain)
    ActorFocusInfix,
    /// `-in`: object focus (sulat-in)
    ObjectFocus,
    /// `-an`: locative focus
    Locative,
    /// `pag-`: nominalizer
    Nominalizer,
    /// `i-`: conveyance focus
    ConveyanceFocus,
    /// `ka-`: superlative / recent completion
    Superlative,
    /// `pang-`: distributive
    Distributive,
}

impl AffixTag {
    pub const ALL: [AffixTag; 9] = [
        Self::ActorFocus,
        Self::CompletedActorFocus,
        Self::ActorFocusInfix,
        Self::ObjectFocus,
        Self::Locative,
        Self::Nominalizer,
        Self::ConveyanceFocus,
        Self::Superlative,
        Self::Distributive,
    ];

    /// The bare affix this tag attaches
    pub fn affix(self) -> &'static str {
        match self {
            Self::ActorFocus => "mag",
            Self::CompletedActorFocus => "nag",
            Self::ActorFocusInfix => "um",
            Self::ObjectFocus => "in",
            Self::Locative => "an",
            Self::Nominalizer => "pag",
            Self::ConveyanceFocus => "i",
            Self::Superlative => "ka",
            Self::Distributive => "pang",
        }
    }

    /// Attach this affix to `root`
    pub fn apply(self, root: &str) -> String {
        match self {
            Self::ActorFocusInfix => insert_um(root),
            Self::ObjectFocus | Self::Locative => format!("{root}-{}", self.affix()),
            prefix => format!("{}-{root}", prefix.affix()),
        }
    }
}

impl FromStr for AffixTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match s.trim().to_lowercase().as_str() {
            "mag" | "mag-focus" | "actor-focus" => Self::ActorFocus,
            "nag" | "nag-focus" | "completed-actor-focus" => Self::CompletedActorFocus,
            "um" | "infix" | "actor-focus-infix" => Self::ActorFocusInfix,
            "in" | "object-focus" | "object-focus-suffix" => Self::ObjectFocus,
            "an" | "locative" | "locative-suffix" => Self::Locative,
            "pag" | "nominalizer" => Self::Nominalizer,
            "i" | "conveyance-focus" => Self::ConveyanceFocus,
            "ka" | "superlative" | "recent-completion" => Self::Superlative,
            "pang" | "distributive" => Self::Distributive,
            other => anyhow::bail!("Unknown affix tag: {other}"),
        };
        Ok(tag)
    }
}

/// Attach an affix to a root
pub fn affix(root: &str, tag: AffixTag) -> String {
    tag.apply(root)
}

/// Attach an affix named by string; unknown names leave the root unchanged
pub fn affix_by_name(root: &str, tag: &str) -> String {
    match tag.parse::<AffixTag>() {
        Ok(tag) => tag.apply(root),
        Err(_) => root.to_string(),
    }
}

/// Insert `um` before the first vowel, or prefix it when the root starts with a
/// vowel or has none
fn insert_um(root: &str) -> String {
    match root.char_indices().find(|&(_, ch)| is_vowel(ch)) {
        Some((idx, _)) => format!("{}um{}", &root[..idx], &root[idx..]),
        None => format!("um{root}"),
    }
}
