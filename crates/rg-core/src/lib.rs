//! `rg-core` — foundational types for the `raidgroups` scheduler.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `PlayerId`, `CharacterId`, `ActivityId`           |
//! | [`time`]  | `Slot`, `TimeGrid`                                |
//! | [`role`]  | `Role` enum, `RoleRules` keyword classifier       |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod role;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, CharacterId, PlayerId};
pub use role::{Role, RoleRules};
pub use time::{Slot, TimeGrid};
