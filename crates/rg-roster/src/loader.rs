//! CSV roster loaders.
//!
//! Two files feed one roster: a character registry and an availability
//! calendar.  Both loaders are `Read`-generic so tests (and hosts that keep
//! rosters in memory or fetch them over the network) can pass a
//! `std::io::Cursor`.
//!
//! # Character CSV format
//!
//! One row per registered character:
//!
//! ```csv
//! player,character,class,power,activity
//! kenkixdd,HolyKen,Paladin,1690,2
//! pastacino,Noodle,Sorc,1672,1
//! pastacino,Spaghetti,Sorc,1661,0
//! ```
//!
//! Players are upserted on first mention; the duplicate-name policy of the
//! target roster applies row by row.
//!
//! # Availability CSV format
//!
//! One row per same-day start–end range, expanded through
//! [`TimeGrid::expand_range`][rg_core::TimeGrid::expand_range] (ticks,
//! inclusive of both endpoints):
//!
//! ```csv
//! player,day,start_tick,end_tick
//! kenkixdd,0,36,44
//! kenkixdd,3,20,30
//! ```
//!
//! All rows for one player are accumulated and stored with a single
//! wholesale `set_availability` call, so loading replaces — never merges
//! into — whatever availability the player had before.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rg_core::{ActivityId, PlayerId, Slot};

use crate::error::{RosterError, RosterResult};
use crate::roster::Roster;

// ── CSV records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CharacterRecord {
    player:    String,
    character: String,
    class:     String,
    power:     u32,
    activity:  u16,
}

#[derive(Deserialize)]
struct AvailabilityRecord {
    player:     String,
    day:        u8,
    start_tick: u16,
    end_tick:   u16,
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Load character registrations from a CSV file into `roster`.
///
/// Returns the number of characters registered.
pub fn load_characters_csv(path: &Path, roster: &mut Roster) -> RosterResult<usize> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_characters_reader(file, roster)
}

/// Like [`load_characters_csv`] but accepts any `Read` source.
pub fn load_characters_reader<R: Read>(reader: R, roster: &mut Roster) -> RosterResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut loaded = 0;

    for result in csv_reader.deserialize::<CharacterRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        let player = roster.upsert_player(&row.player);
        roster.add_character(
            player,
            &row.character,
            &row.class,
            row.power,
            ActivityId(row.activity),
        )?;
        loaded += 1;
    }

    Ok(loaded)
}

/// Load availability ranges from a CSV file into `roster`.
///
/// Returns the number of rows consumed.
pub fn load_availability_csv(path: &Path, roster: &mut Roster) -> RosterResult<usize> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_availability_reader(file, roster)
}

/// Like [`load_availability_csv`] but accepts any `Read` source.
pub fn load_availability_reader<R: Read>(reader: R, roster: &mut Roster) -> RosterResult<usize> {
    let grid = roster.grid();
    let mut csv_reader = csv::Reader::from_reader(reader);

    // ── Accumulate points per player ──────────────────────────────────────
    let mut by_player: HashMap<PlayerId, Vec<Slot>> = HashMap::new();
    let mut rows = 0;

    for result in csv_reader.deserialize::<AvailabilityRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        let player = roster.upsert_player(&row.player);
        let points = grid.expand_range(row.day, row.start_tick, row.end_tick)?;
        by_player.entry(player).or_default().extend(points);
        rows += 1;
    }

    // ── One wholesale replacement per player ──────────────────────────────
    for (player, points) in by_player {
        roster.set_availability(player, points)?;
    }

    Ok(rows)
}
