//! Player storage: identities, character lists, and availability calendars.
//!
//! # Keying
//!
//! Players are stored in a `Vec` indexed by `PlayerId` (IDs are assigned
//! densely at first registration), with a case-insensitive display-name index
//! on the side so input collectors can address players by name.  Availability
//! is a `BTreeSet<Slot>` per player — a set because the model has no
//! start/end semantics (ranges are expanded upstream), a *B-tree* set so
//! every iteration over it is chronological and deterministic.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use rg_core::{ActivityId, CharacterId, PlayerId, Slot, TimeGrid};

use crate::error::{RosterError, RosterResult};

// ── Player / Character ───────────────────────────────────────────────────────

/// A registered player: opaque stable ID plus display name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
}

/// One game character, belonging to exactly one player.
///
/// `id` is the roster-global registration sequence number; within one
/// player's list it also encodes registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Free-form class string; classified into Support/DPS by `RoleRules`.
    pub class_name: String,
    pub power_level: u32,
    /// The activity this character is registered for.
    pub activity: ActivityId,
}

// ── NamePolicy ───────────────────────────────────────────────────────────────

/// Scope of the duplicate character-name rule.
///
/// The source system was inconsistent about this, so it is a configuration
/// knob rather than a hard-coded rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamePolicy {
    /// A player may not register the same name twice *for the same activity*
    /// (the same name on two different activities is fine).
    #[default]
    PerActivity,
    /// A player may not register the same name twice anywhere.
    PerPlayer,
}

// ── Roster ───────────────────────────────────────────────────────────────────

struct PlayerEntry {
    player: Player,
    availability: BTreeSet<Slot>,
    /// In registration order.
    characters: Vec<Character>,
}

/// The exclusively-owned store of all player state.
pub struct Roster {
    grid: TimeGrid,
    policy: NamePolicy,
    entries: Vec<PlayerEntry>,
    /// Lowercased display name → dense player ID.
    by_name: FxHashMap<String, PlayerId>,
    /// Next roster-global character registration sequence number.
    next_character: u32,
}

impl Roster {
    pub fn new(grid: TimeGrid, policy: NamePolicy) -> Self {
        Self {
            grid,
            policy,
            entries: Vec::new(),
            by_name: FxHashMap::default(),
            next_character: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    #[inline]
    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a player, or return the existing ID for this (case-insensitive)
    /// name.  An existing player's display name is refreshed to the submitted
    /// casing, mirroring how chat display names drift between submissions.
    pub fn upsert_player(&mut self, display_name: &str) -> PlayerId {
        let key = display_name.to_lowercase();
        if let Some(&id) = self.by_name.get(&key) {
            self.entries[id.index()].player.display_name = display_name.to_string();
            return id;
        }
        let id = PlayerId(self.entries.len() as u32);
        self.entries.push(PlayerEntry {
            player: Player { id, display_name: display_name.to_string() },
            availability: BTreeSet::new(),
            characters: Vec::new(),
        });
        self.by_name.insert(key, id);
        id
    }

    /// Register a character for `player`.
    ///
    /// Rejects duplicates per the configured [`NamePolicy`] (name comparison
    /// is case-insensitive).
    pub fn add_character(
        &mut self,
        player: PlayerId,
        name: &str,
        class_name: &str,
        power_level: u32,
        activity: ActivityId,
    ) -> RosterResult<CharacterId> {
        let policy = self.policy;
        let entry = self.entry_mut(player)?;

        let lower = name.to_lowercase();
        let clash = entry.characters.iter().any(|c| {
            c.name.to_lowercase() == lower
                && match policy {
                    NamePolicy::PerActivity => c.activity == activity,
                    NamePolicy::PerPlayer => true,
                }
        });
        if clash {
            return Err(RosterError::DuplicateCharacter { player, name: name.to_string() });
        }

        let id = CharacterId(self.next_character);
        self.next_character += 1;
        self.entries[player.index()].characters.push(Character {
            id,
            name: name.to_string(),
            class_name: class_name.to_string(),
            power_level,
            activity,
        });
        Ok(id)
    }

    // ── Availability ──────────────────────────────────────────────────────

    /// Replace `player`'s availability wholesale with the given points.
    ///
    /// Every point must lie inside the roster's [`TimeGrid`]; one out-of-grid
    /// point rejects the whole submission (this is the validated-input
    /// boundary — nothing invalid gets stored).
    pub fn set_availability<I>(&mut self, player: PlayerId, slots: I) -> RosterResult<()>
    where
        I: IntoIterator<Item = Slot>,
    {
        let grid = self.grid;
        let mut points = BTreeSet::new();
        for slot in slots {
            grid.slot(slot.day, slot.tick)?;
            points.insert(slot);
        }
        self.entry_mut(player)?.availability = points;
        Ok(())
    }

    /// Drop `player`'s availability, keeping their characters.
    pub fn clear_availability(&mut self, player: PlayerId) -> RosterResult<()> {
        self.entry_mut(player)?.availability.clear();
        Ok(())
    }

    /// Start-of-week reset: clears every player's availability and character
    /// list but keeps the identities (and their IDs) stable.
    pub fn clear_week(&mut self) {
        for entry in &mut self.entries {
            entry.availability.clear();
            entry.characters.clear();
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.entries.get(id.index()).map(|e| &e.player)
    }

    /// Case-insensitive display-name lookup.
    pub fn find_player(&self, display_name: &str) -> Option<PlayerId> {
        self.by_name.get(&display_name.to_lowercase()).copied()
    }

    /// All players, in ascending `PlayerId` order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.entries.iter().map(|e| &e.player)
    }

    /// `player`'s availability calendar (chronological iteration).
    pub fn availability(&self, player: PlayerId) -> Option<&BTreeSet<Slot>> {
        self.entries.get(player.index()).map(|e| &e.availability)
    }

    /// `player`'s characters, in registration order.
    pub fn characters(&self, player: PlayerId) -> Option<&[Character]> {
        self.entries.get(player.index()).map(|e| e.characters.as_slice())
    }

    /// Look up one character of `player` by its registration ID.
    pub fn character(&self, player: PlayerId, character: CharacterId) -> Option<&Character> {
        self.characters(player)?.iter().find(|c| c.id == character)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn entry_mut(&mut self, player: PlayerId) -> RosterResult<&mut PlayerEntry> {
        self.entries
            .get_mut(player.index())
            .ok_or(RosterError::UnknownPlayer(player))
    }
}
