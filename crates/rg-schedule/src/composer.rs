//! Greedy quota-driven group composition for one bucket.
//!
//! Pure function: given one bucket's entries in their (already sorted)
//! stable order, carve off as many **Full** groups as the quotas allow,
//! then as many **Partial** groups, FIFO — the earliest entry in the
//! bucket's order is placed first.  Whatever cannot fill even a partial
//! group is left behind; each bucket is matched independently and leftovers
//! are never carried to another slot.

use std::collections::VecDeque;

use rg_core::Role;
use rg_roster::RoleQuota;

use crate::assignment::GroupKind;
use crate::indexer::BucketEntry;

/// One composed group, members ordered supports first, then DPS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedGroup {
    pub kind: GroupKind,
    pub members: Vec<BucketEntry>,
}

/// Compose groups out of one bucket.
///
/// Deterministic for a given `entries` order.  Zero supports or zero DPS in
/// the bucket means no groups (every quota demands at least one of each or
/// was validated to a satisfiable shape).
pub fn compose(entries: &[BucketEntry], full: RoleQuota, partial: RoleQuota) -> Vec<ComposedGroup> {
    // Stable partition: input order survives within each role queue.
    let mut supports: VecDeque<BucketEntry> = VecDeque::new();
    let mut dps: VecDeque<BucketEntry> = VecDeque::new();
    for &entry in entries {
        match entry.role {
            Role::Support => supports.push_back(entry),
            Role::Dps => dps.push_back(entry),
        }
    }

    let mut groups = Vec::new();

    while supports.len() >= full.supports as usize && dps.len() >= full.dps as usize {
        groups.push(take_group(&mut supports, &mut dps, full, GroupKind::Full));
    }

    while supports.len() >= partial.supports as usize && dps.len() >= partial.dps as usize {
        // A quota with both roles at zero would loop forever; activity
        // validation guarantees partial.size() >= 1.
        groups.push(take_group(&mut supports, &mut dps, partial, GroupKind::Partial));
    }

    groups
}

/// Pop the front `quota.supports` supports and `quota.dps` DPS into a group.
fn take_group(
    supports: &mut VecDeque<BucketEntry>,
    dps: &mut VecDeque<BucketEntry>,
    quota: RoleQuota,
    kind: GroupKind,
) -> ComposedGroup {
    let mut members = Vec::with_capacity(quota.size() as usize);
    members.extend(supports.drain(..quota.supports as usize));
    members.extend(dps.drain(..quota.dps as usize));
    ComposedGroup { kind, members }
}
