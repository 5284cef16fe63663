//! `rg-roster` — the scheduler's data model: players, characters, weekly
//! availability, and activity configuration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`roster`]   | `Player`, `Character`, `Roster`, `NamePolicy`           |
//! | [`activity`] | `Activity`, `ActivityKind`, `RoleQuota`, `FixedMember`  |
//! | [`loader`]   | `load_characters_csv`, `load_availability_csv`          |
//! | [`error`]    | `RosterError`, `RosterResult<T>`                        |
//!
//! # Ownership model (summary)
//!
//! The `Roster` exclusively owns all player state.  The scheduler only ever
//! reads it; input collection, persistence, and the weekly reset are external
//! collaborators that mutate it through the methods here.  Availability is
//! replaced wholesale on resubmission, never merged field-by-field, matching
//! how players actually correct their calendars.
//!
//! `Activity` values are configuration, not derived state — the application
//! constructs them once and passes them to every run.

pub mod activity;
pub mod error;
pub mod loader;
pub mod roster;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityKind, FixedMember, RoleQuota};
pub use error::{RosterError, RosterResult};
pub use loader::{
    load_availability_csv, load_availability_reader, load_characters_csv, load_characters_reader,
};
pub use roster::{Character, NamePolicy, Player, Roster};
