//! Support/DPS role classification.
//!
//! Character classes arrive as free-form strings ("Paladin", "paladin
//! support", "Sorc").  Group quotas only distinguish two roles, so
//! classification is a keyword scan: a class is Support if its lowercased
//! name *contains* any configured support keyword, DPS otherwise.
//!
//! The substring match is deliberate — "Paladin" and "Paladin Support" must
//! classify identically, and an unrecognized class silently falls through to
//! DPS so the Support/DPS split stays total.

use std::fmt;

// ── Role ─────────────────────────────────────────────────────────────────────

/// The two role categories group-composition quotas count.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Support,
    Dps,
}

impl Role {
    #[inline]
    pub fn is_support(self) -> bool {
        matches!(self, Role::Support)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Support => write!(f, "Support"),
            Role::Dps => write!(f, "DPS"),
        }
    }
}

// ── RoleRules ────────────────────────────────────────────────────────────────

/// The configured support-keyword set.
///
/// Keywords are stored lowercased; [`RoleRules::classify`] lowercases the
/// candidate class name once and checks containment per keyword.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleRules {
    support_keywords: Vec<String>,
}

impl RoleRules {
    /// Build rules from an arbitrary keyword set (lowercased on entry).
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            support_keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Classify a free-form class name into Support or DPS.
    pub fn classify(&self, class_name: &str) -> Role {
        let lower = class_name.to_lowercase();
        if self.support_keywords.iter().any(|k| lower.contains(k.as_str())) {
            Role::Support
        } else {
            Role::Dps
        }
    }

    pub fn support_keywords(&self) -> &[String] {
        &self.support_keywords
    }
}

impl Default for RoleRules {
    /// The conventional support classes: bard, paladin, artist.
    fn default() -> Self {
        Self::new(["bard", "paladin", "artist"])
    }
}
