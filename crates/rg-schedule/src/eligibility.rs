//! Per-character eligibility for one activity.
//!
//! A character qualifies for a matched activity when it is registered for
//! that activity and meets its power threshold.  The optional
//! cross-activity-uniqueness rule additionally disqualifies a character
//! whose name the same player has registered for a *different* activity
//! (off by default; the source systems disagreed on it).
//!
//! Fixed activities never consult the filter — their membership is
//! configuration.

use rg_core::{Role, RoleRules};
use rg_roster::{Activity, ActivityKind, Character};

/// Stateless eligibility decisions over borrowed role rules.
pub struct EligibilityFilter<'a> {
    rules: &'a RoleRules,
    cross_activity_unique: bool,
}

impl<'a> EligibilityFilter<'a> {
    pub fn new(rules: &'a RoleRules) -> Self {
        Self { rules, cross_activity_unique: false }
    }

    /// Enable the cross-activity character-name uniqueness rule.
    pub fn with_cross_activity_unique(mut self, enabled: bool) -> Self {
        self.cross_activity_unique = enabled;
        self
    }

    /// Support/DPS classification of a character's free-form class string.
    #[inline]
    pub fn role(&self, character: &Character) -> Role {
        self.rules.classify(&character.class_name)
    }

    /// May `character` be assigned to `activity`?
    ///
    /// `owned` is the owning player's full character list, needed only for
    /// the cross-activity uniqueness check.
    pub fn is_eligible(&self, owned: &[Character], character: &Character, activity: &Activity) -> bool {
        let ActivityKind::Matched { min_power, .. } = &activity.kind else {
            return false;
        };
        if character.activity != activity.id {
            return false;
        }
        if character.power_level < *min_power {
            return false;
        }
        if self.cross_activity_unique {
            let lower = character.name.to_lowercase();
            let clash = owned.iter().any(|other| {
                other.id != character.id
                    && other.activity != character.activity
                    && other.name.to_lowercase() == lower
            });
            if clash {
                return false;
            }
        }
        true
    }
}
