//! Output records: who plays what, where, when.
//!
//! `GroupAssignment` is the scheduler's only product.  It is immutable once
//! produced and owned by the caller — typically rendered into a notification
//! and discarded after one run.

use std::fmt;

use rg_core::{ActivityId, PlayerId, Role, Slot};

// ── GroupKind ────────────────────────────────────────────────────────────────

/// Whether a group meets the activity's primary quota or only the reduced
/// partial minimum.  Fixed-roster groups are emitted as `Full`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    Full,
    Partial,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Full => write!(f, "Full"),
            GroupKind::Partial => write!(f, "Partial"),
        }
    }
}

// ── GroupMember ──────────────────────────────────────────────────────────────

/// One placed (player, character) pair.
///
/// `player` is `None` for fixed-roster members who are not registered in the
/// roster — the fixed list is configuration and is emitted regardless.  Fixed
/// members register no character either; their display name stands in for
/// `character`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMember {
    pub player: Option<PlayerId>,
    pub display_name: String,
    pub character: String,
    pub class_name: String,
    pub role: Role,
}

impl fmt::Display for GroupMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.character, self.class_name, self.display_name)
    }
}

// ── GroupAssignment ──────────────────────────────────────────────────────────

/// One scheduled group: activity, time slot, and the placed members with
/// supports first (in placement order), then DPS.
///
/// `slot` is `None` for the synthetic fixed-roster group, which is emitted
/// once per run independent of any time bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAssignment {
    pub activity: ActivityId,
    pub slot: Option<Slot>,
    pub kind: GroupKind,
    pub members: Vec<GroupMember>,
}

impl GroupAssignment {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members with the given role.
    pub fn role_count(&self, role: Role) -> usize {
        self.members.iter().filter(|m| m.role == role).count()
    }
}

impl fmt::Display for GroupAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "{} [{}]:", self.kind, slot)?,
            None => write!(f, "{} [fixed]:", self.kind)?,
        }
        for (i, member) in self.members.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{member}")?;
        }
        Ok(())
    }
}
