//! Activity configuration: role quotas and the two scheduling kinds.
//!
//! An activity is either **matched** — groups are composed from eligible,
//! available characters under full/partial role quotas — or **fixed** — a
//! hand-curated member list emitted as-is, bypassing matching entirely.
//!
//! Configuration is validated once at run start via [`Activity::validate`];
//! a malformed activity is skipped in isolation (it never poisons the rest
//! of the run, and it never yields partial results).

use rg_core::ActivityId;

use crate::error::{RosterError, RosterResult};

// ── RoleQuota ────────────────────────────────────────────────────────────────

/// A role-composition requirement: how many supports and DPS one group needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleQuota {
    pub supports: u8,
    pub dps: u8,
}

impl RoleQuota {
    pub const fn new(supports: u8, dps: u8) -> Self {
        Self { supports, dps }
    }

    /// Total group size under this quota.
    #[inline]
    pub fn size(&self) -> u16 {
        self.supports as u16 + self.dps as u16
    }
}

// ── FixedMember ──────────────────────────────────────────────────────────────

/// One entry of a hand-curated fixed roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedMember {
    pub display_name: String,
    /// Free-form class string, classified by `RoleRules` at emission.
    pub class_name: String,
}

impl FixedMember {
    pub fn new(display_name: &str, class_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

// ── Activity ─────────────────────────────────────────────────────────────────

/// How an activity's groups come to be.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    /// Composed from the roster under eligibility and quota rules.
    Matched {
        /// Minimum character power level to qualify.
        min_power: u32,
        /// Primary group shape (e.g. 2 supports + 6 DPS).
        full: RoleQuota,
        /// Reduced minimum shape used once no full group fits (e.g. 1 + 3).
        partial: RoleQuota,
    },
    /// An invariant, pre-agreed group emitted once per run, independent of
    /// roster contents.
    Fixed { members: Vec<FixedMember> },
}

/// A named recurring group event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub kind: ActivityKind,
}

impl Activity {
    pub fn matched(
        id: ActivityId,
        name: &str,
        min_power: u32,
        full: RoleQuota,
        partial: RoleQuota,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: ActivityKind::Matched { min_power, full, partial },
        }
    }

    pub fn fixed(id: ActivityId, name: &str, members: Vec<FixedMember>) -> Self {
        Self { id, name: name.to_string(), kind: ActivityKind::Fixed { members } }
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, ActivityKind::Fixed { .. })
    }

    /// Check the configuration invariants.
    ///
    /// Matched: both full quotas ≥ 1, partial ≤ full componentwise, partial
    /// total ≥ 1.  Fixed: non-empty member list.
    pub fn validate(&self) -> RosterResult<()> {
        let fail = |reason: String| {
            Err(RosterError::InvalidActivity { name: self.name.clone(), reason })
        };
        match &self.kind {
            ActivityKind::Matched { full, partial, .. } => {
                if full.supports == 0 || full.dps == 0 {
                    return fail(format!(
                        "full quota needs at least one of each role (got {}+{})",
                        full.supports, full.dps
                    ));
                }
                if partial.supports > full.supports || partial.dps > full.dps {
                    return fail(format!(
                        "partial quota {}+{} exceeds full quota {}+{}",
                        partial.supports, partial.dps, full.supports, full.dps
                    ));
                }
                if partial.size() == 0 {
                    return fail("partial quota is empty".to_string());
                }
                Ok(())
            }
            ActivityKind::Fixed { members } => {
                if members.is_empty() {
                    return fail("fixed roster has no members".to_string());
                }
                Ok(())
            }
        }
    }
}
