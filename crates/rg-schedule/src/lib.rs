//! `rg-schedule` — the availability-driven group-composition scheduler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`assignment`]  | `GroupAssignment`, `GroupMember`, `GroupKind`           |
//! | [`eligibility`] | `EligibilityFilter` (power threshold + role split)      |
//! | [`indexer`]     | `build_buckets` (`BTreeMap<Slot, Vec<BucketEntry>>`)    |
//! | [`composer`]    | `compose` (greedy full-then-partial quota matching)     |
//! | [`run`]         | `Scheduler`, `RunReport`, `RunObserver`                 |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Pipeline (summary)
//!
//! ```text
//! for each activity (configuration order):
//!   validate config          — invalid activities are skipped in isolation
//!   fixed roster?            — emit one synthetic Full group, done
//!   build_buckets            — slot → eligible (player, character) entries,
//!                              sorted by (player, registration order)
//!   for each slot (chronological):
//!     drop already-placed characters (run-scoped dedup set)
//!     compose                — greedy Full groups, then Partial groups
//! ```
//!
//! One run is a pure, synchronous function of its inputs: no I/O, no
//! interior mutability, no randomness.  Running it twice over an unmodified
//! roster yields identical output.

pub mod assignment;
pub mod composer;
pub mod eligibility;
pub mod error;
pub mod indexer;
pub mod run;


pub use assignment::{GroupAssignment, GroupKind, GroupMember};
pub use composer::{compose, ComposedGroup};
pub use eligibility::EligibilityFilter;
pub use error::{ScheduleError, ScheduleResult};
pub use indexer::{build_buckets, BucketEntry, BucketIndex};
pub use run::{NoopObserver, RunObserver, RunReport, Scheduler};
