//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `#[from]` impls, keeping error sites clean at each layer.

use thiserror::Error;

/// The top-level error type for `rg-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("day {day} is outside the grid (0..{num_days})")]
    DayOutOfRange { day: u8, num_days: u8 },

    #[error("tick {tick} is outside the grid (0..{ticks_per_day})")]
    TickOutOfRange { tick: u16, ticks_per_day: u16 },
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
