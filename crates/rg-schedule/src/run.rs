//! The schedule run: one full pass over roster and activity configuration.
//!
//! # Per-activity isolation
//!
//! Activities are processed independently, in configuration order.  An
//! activity with invalid configuration is recorded in
//! [`RunReport::skipped`] and produces no groups; the remaining activities
//! still run.  A fixed-roster activity short-circuits to one synthetic Full
//! group.  A matched activity walks its buckets chronologically.
//!
//! # Cross-slot dedup
//!
//! A player available at several slots appears in several buckets, so naive
//! per-bucket matching would book the same character into simultaneous
//! groups.  Each matched activity therefore owns a run-scoped set of
//! `(player, lowercased character name)` keys; once a character is placed,
//! later buckets no longer see it.  First chronological slot wins.
//!
//! The run itself is pure and synchronous — no I/O, no shared state.  A
//! host wanting per-activity parallelism can run disjoint activity slices
//! on one `Scheduler` from several threads; every run owns its dedup state.

use rustc_hash::FxHashSet;

use rg_core::{ActivityId, PlayerId, Role, RoleRules};
use rg_roster::{Activity, ActivityKind, FixedMember, RoleQuota, Roster};

use crate::assignment::{GroupAssignment, GroupKind, GroupMember};
use crate::composer::compose;
use crate::eligibility::EligibilityFilter;
use crate::error::ScheduleError;
use crate::indexer::{build_buckets, BucketEntry};

// ── RunObserver ──────────────────────────────────────────────────────────────

/// Callbacks invoked during a run, for progress reporting and logging.
///
/// All methods have default no-op implementations; the scheduler performs no
/// I/O of its own, so anything a host wants to see goes through here.
pub trait RunObserver {
    /// A matched activity is about to be composed; `buckets` is the number of
    /// distinct time slots holding at least one eligible character.
    fn on_activity_start(&mut self, _activity: &Activity, _buckets: usize) {}

    /// A group was emitted (fixed or composed).
    fn on_group(&mut self, _group: &GroupAssignment) {}

    /// An activity was skipped in isolation; the rest of the run continues.
    fn on_activity_skipped(&mut self, _activity: &Activity, _error: &ScheduleError) {}

    /// The run finished; `report` is about to be returned to the caller.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

// ── RunReport ────────────────────────────────────────────────────────────────

/// Everything one run produced.
///
/// `groups` is ordered: activities in configuration order, slots
/// chronologically within an activity, supports before DPS within a group.
#[derive(Debug, Default)]
pub struct RunReport {
    pub groups: Vec<GroupAssignment>,
    /// Activities that were skipped, with the reason.
    pub skipped: Vec<(ActivityId, ScheduleError)>,
    /// Availability points that fell outside the roster's grid (skipped).
    pub dropped_points: usize,
}

impl RunReport {
    /// Groups emitted for one activity, in output order.
    pub fn groups_for(&self, activity: ActivityId) -> impl Iterator<Item = &GroupAssignment> {
        self.groups.iter().filter(move |g| g.activity == activity)
    }
}

// ── Scheduler ────────────────────────────────────────────────────────────────

/// The single externally visible entry point.
///
/// Holds run-independent configuration only; [`Scheduler::run`] borrows the
/// roster immutably and owns all per-run state, so a `Scheduler` is freely
/// shareable across threads.
pub struct Scheduler {
    rules: RoleRules,
    cross_activity_unique: bool,
}

impl Scheduler {
    pub fn new(rules: RoleRules) -> Self {
        Self { rules, cross_activity_unique: false }
    }

    /// Enable the cross-activity character-name uniqueness rule (off by
    /// default; see [`EligibilityFilter::with_cross_activity_unique`]).
    pub fn with_cross_activity_unique(mut self, enabled: bool) -> Self {
        self.cross_activity_unique = enabled;
        self
    }

    /// One full pass: every activity, every slot, aggregated in order.
    pub fn run(&self, roster: &Roster, activities: &[Activity]) -> RunReport {
        self.run_with(roster, activities, &mut NoopObserver)
    }

    /// Like [`Scheduler::run`], with progress callbacks.
    pub fn run_with(
        &self,
        roster: &Roster,
        activities: &[Activity],
        observer: &mut dyn RunObserver,
    ) -> RunReport {
        let mut report = RunReport::default();
        let mut seen_ids = FxHashSet::default();

        for activity in activities {
            if !seen_ids.insert(activity.id) {
                let err = ScheduleError::DuplicateActivityId(activity.id);
                observer.on_activity_skipped(activity, &err);
                report.skipped.push((activity.id, err));
                continue;
            }
            if let Err(e) = activity.validate() {
                let err = ScheduleError::from(e);
                observer.on_activity_skipped(activity, &err);
                report.skipped.push((activity.id, err));
                continue;
            }

            match &activity.kind {
                ActivityKind::Fixed { members } => {
                    let group = self.fixed_group(activity, members, roster);
                    observer.on_group(&group);
                    report.groups.push(group);
                }
                ActivityKind::Matched { full, partial, .. } => {
                    self.run_matched(roster, activity, *full, *partial, observer, &mut report);
                }
            }
        }

        observer.on_run_end(&report);
        report
    }

    // ── Matched activities ────────────────────────────────────────────────

    fn run_matched(
        &self,
        roster: &Roster,
        activity: &Activity,
        full: RoleQuota,
        partial: RoleQuota,
        observer: &mut dyn RunObserver,
        report: &mut RunReport,
    ) {
        let filter = EligibilityFilter::new(&self.rules)
            .with_cross_activity_unique(self.cross_activity_unique);
        let index = build_buckets(roster, activity, &filter);
        report.dropped_points += index.dropped_points;
        observer.on_activity_start(activity, index.buckets.len());

        // Run-scoped, per-activity: once a character is placed, later slots
        // no longer see it.
        let mut used: FxHashSet<(PlayerId, String)> = FxHashSet::default();

        for (&slot, bucket) in &index.buckets {
            let survivors: Vec<BucketEntry> = bucket
                .iter()
                .filter(|e| match roster.character(e.player, e.character) {
                    Some(c) => !used.contains(&(e.player, c.name.to_lowercase())),
                    None => false,
                })
                .copied()
                .collect();

            for composed in compose(&survivors, full, partial) {
                let mut members = Vec::with_capacity(composed.members.len());
                for entry in composed.members {
                    let Some(character) = roster.character(entry.player, entry.character) else {
                        continue;
                    };
                    used.insert((entry.player, character.name.to_lowercase()));
                    let display_name = roster
                        .player(entry.player)
                        .map(|p| p.display_name.clone())
                        .unwrap_or_default();
                    members.push(GroupMember {
                        player: Some(entry.player),
                        display_name,
                        character: character.name.clone(),
                        class_name: character.class_name.clone(),
                        role: entry.role,
                    });
                }

                let group = GroupAssignment {
                    activity: activity.id,
                    slot: Some(slot),
                    kind: composed.kind,
                    members,
                };
                observer.on_group(&group);
                report.groups.push(group);
            }
        }
    }

    // ── Fixed activities ──────────────────────────────────────────────────

    /// The synthetic group for a fixed roster: configuration emitted as-is,
    /// supports first, independent of availability or roster contents.
    fn fixed_group(
        &self,
        activity: &Activity,
        members: &[FixedMember],
        roster: &Roster,
    ) -> GroupAssignment {
        let to_member = |m: &FixedMember| GroupMember {
            player: roster.find_player(&m.display_name),
            display_name: m.display_name.clone(),
            // Fixed members register no character; the display name stands in.
            character: m.display_name.clone(),
            class_name: m.class_name.clone(),
            role: self.rules.classify(&m.class_name),
        };

        let mut placed: Vec<GroupMember> = members
            .iter()
            .map(&to_member)
            .filter(|m| m.role == Role::Support)
            .collect();
        placed.extend(members.iter().map(&to_member).filter(|m| m.role == Role::Dps));

        GroupAssignment {
            activity: activity.id,
            slot: None,
            kind: GroupKind::Full,
            members: placed,
        }
    }
}
