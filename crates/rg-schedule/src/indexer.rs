//! Slot indexing: invert the roster into per-slot eligibility buckets.
//!
//! # Why a `BTreeMap`
//!
//! The run must visit buckets in ascending chronological order (the
//! first-slot-wins dedup rule depends on it), and two runs over the same
//! roster must visit them identically.  Keying buckets by `Slot` in a
//! `BTreeMap` gives both properties for free, where an unordered map would
//! need a sort at every consumer.
//!
//! # Bucket contents
//!
//! For every player with at least one eligible character, every availability
//! point contributes *all* of that player's eligible characters to that
//! point's bucket.  A player therefore appears once per available slot and
//! may contribute several characters to the same bucket.  Buckets hold
//! small `Copy` entries; names are resolved from the roster only when a
//! group is actually emitted.

use std::collections::BTreeMap;

use rg_core::{CharacterId, PlayerId, Role, Slot};
use rg_roster::{Activity, Roster};

use crate::eligibility::EligibilityFilter;

/// One eligible (player, character) pair inside a bucket.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BucketEntry {
    pub player: PlayerId,
    pub character: CharacterId,
    pub role: Role,
}

/// All buckets for one activity, plus a count of availability points that
/// fell outside the roster's grid (skipped, never fatal).
pub struct BucketIndex {
    pub buckets: BTreeMap<Slot, Vec<BucketEntry>>,
    pub dropped_points: usize,
}

impl BucketIndex {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Build the per-slot eligibility buckets for `activity`.
///
/// Each bucket comes back sorted by `(player, character)` — ascending player
/// ID, then character registration order — so downstream composition is
/// deterministic no matter how the bucket was assembled.  Buckets with no
/// eligible characters are omitted entirely.
pub fn build_buckets(
    roster: &Roster,
    activity: &Activity,
    filter: &EligibilityFilter<'_>,
) -> BucketIndex {
    let grid = roster.grid();
    let mut buckets: BTreeMap<Slot, Vec<BucketEntry>> = BTreeMap::new();
    let mut dropped_points = 0;

    for player in roster.players() {
        let Some(owned) = roster.characters(player.id) else { continue };

        let eligible: Vec<BucketEntry> = owned
            .iter()
            .filter(|c| filter.is_eligible(owned, c, activity))
            .map(|c| BucketEntry {
                player: player.id,
                character: c.id,
                role: filter.role(c),
            })
            .collect();
        if eligible.is_empty() {
            continue;
        }

        let Some(availability) = roster.availability(player.id) else { continue };
        for &slot in availability {
            // Roster submissions are validated against the grid, but a roster
            // assembled by other means may carry strays; skip and count them
            // rather than blocking unrelated groups.
            if !grid.contains(slot) {
                dropped_points += 1;
                continue;
            }
            buckets.entry(slot).or_default().extend_from_slice(&eligible);
        }
    }

    for bucket in buckets.values_mut() {
        bucket.sort_unstable_by_key(|e| (e.player, e.character));
    }

    BucketIndex { buckets, dropped_points }
}
