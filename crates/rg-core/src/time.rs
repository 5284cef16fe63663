//! The weekly time grid.
//!
//! # Design
//!
//! Availability and scheduling both reason over a discrete universe of
//! `(day, tick)` points — the `TimeGrid`.  A `Slot` is one such point:
//! `day` indexes into the grid's day range (0 = first scheduling day) and
//! `tick` is a time-of-day step of `tick_minutes` minutes.
//!
//! Using integer ticks as the canonical time unit means all slot arithmetic
//! is exact and ordering is a plain derived `Ord` (day-major, then tick).
//! There is no datetime library here on purpose: the scheduler never needs
//! wall-clock time, only a total order over a finite domain.
//!
//! Any "start–end" range a caller collects is expanded into discrete points
//! via [`TimeGrid::expand_range`] before it reaches the roster; the model
//! itself stores only points.

use std::fmt;

use crate::error::{CoreError, CoreResult};

// ── Slot ─────────────────────────────────────────────────────────────────────

/// One discrete time point: a day index plus a time-of-day tick.
///
/// `Ord` is chronological: day-major, then tick.  Cheap to copy; a `Slot` is
/// meaningful only relative to the [`TimeGrid`] it was drawn from.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Day index within the grid, 0-based.
    pub day: u8,
    /// Time-of-day step within the day, 0-based.
    pub tick: u16,
}

impl Slot {
    #[inline]
    pub fn new(day: u8, tick: u16) -> Self {
        Self { day, tick }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}t{}", self.day, self.tick)
    }
}

// ── TimeGrid ─────────────────────────────────────────────────────────────────

/// The valid domain of [`Slot`]s: `num_days × ticks_per_day` points.
///
/// `TimeGrid` is cheap to copy and intentionally holds no heap data.  Mapping
/// day indices to names ("day 0 = Wednesday") is the application's concern;
/// the grid only knows the tick resolution for time-of-day labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    /// Number of scheduling days in one weekly cycle.
    pub num_days: u8,
    /// Number of ticks per day.
    pub ticks_per_day: u16,
    /// How many minutes one tick represents.  Default: 30.
    pub tick_minutes: u32,
}

impl TimeGrid {
    /// Create a grid.  Fails on zero dimensions.
    pub fn new(num_days: u8, ticks_per_day: u16, tick_minutes: u32) -> CoreResult<Self> {
        if num_days == 0 || ticks_per_day == 0 || tick_minutes == 0 {
            return Err(CoreError::Config(format!(
                "time grid dimensions must be nonzero (got {num_days} days × \
                 {ticks_per_day} ticks × {tick_minutes} min)"
            )));
        }
        Ok(Self { num_days, ticks_per_day, tick_minutes })
    }

    /// `true` if `slot` lies inside this grid's domain.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot.day < self.num_days && slot.tick < self.ticks_per_day
    }

    /// Total number of valid slots.
    #[inline]
    pub fn slot_count(&self) -> u32 {
        self.num_days as u32 * self.ticks_per_day as u32
    }

    /// Construct a validated slot.
    pub fn slot(&self, day: u8, tick: u16) -> CoreResult<Slot> {
        if day >= self.num_days {
            return Err(CoreError::DayOutOfRange { day, num_days: self.num_days });
        }
        if tick >= self.ticks_per_day {
            return Err(CoreError::TickOutOfRange { tick, ticks_per_day: self.ticks_per_day });
        }
        Ok(Slot { day, tick })
    }

    /// Position of `slot` in chronological enumeration of the whole grid.
    #[inline]
    pub fn ordinal(&self, slot: Slot) -> u32 {
        slot.day as u32 * self.ticks_per_day as u32 + slot.tick as u32
    }

    /// Expand a same-day start–end range into discrete slots, **inclusive of
    /// both endpoints** (an 18:00–22:00 window at 30-minute ticks yields nine
    /// points, 18:00 through 22:00).
    pub fn expand_range(&self, day: u8, start_tick: u16, end_tick: u16) -> CoreResult<Vec<Slot>> {
        if start_tick > end_tick {
            return Err(CoreError::Config(format!(
                "range start tick {start_tick} is after end tick {end_tick}"
            )));
        }
        // Validates both endpoints up front so a half-bad range is rejected whole.
        self.slot(day, start_tick)?;
        self.slot(day, end_tick)?;
        Ok((start_tick..=end_tick).map(|tick| Slot { day, tick }).collect())
    }

    /// Human-readable "day D HH:MM" label for a slot.
    pub fn label(&self, slot: Slot) -> String {
        let minutes = slot.tick as u32 * self.tick_minutes;
        format!("day {} {:02}:{:02}", slot.day, minutes / 60, minutes % 60)
    }
}

impl Default for TimeGrid {
    /// Five scheduling days at 30-minute resolution — the shape of a
    /// Wednesday-to-Sunday raid week.
    fn default() -> Self {
        Self { num_days: 5, ticks_per_day: 48, tick_minutes: 30 }
    }
}
