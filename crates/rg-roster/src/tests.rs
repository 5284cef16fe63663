//! Unit tests for rg-roster.

use std::io::Cursor;

use rg_core::{ActivityId, PlayerId, Slot, TimeGrid};

use crate::{
    load_availability_reader, load_characters_reader, Activity, ActivityKind, FixedMember,
    NamePolicy, RoleQuota, Roster, RosterError,
};

fn week_grid() -> TimeGrid {
    TimeGrid::new(5, 48, 30).unwrap()
}

fn roster() -> Roster {
    Roster::new(week_grid(), NamePolicy::default())
}

const RAID: ActivityId = ActivityId(0);
const OTHER_RAID: ActivityId = ActivityId(1);

// ── Roster ───────────────────────────────────────────────────────────────────

mod roster_store {
    use super::*;

    #[test]
    fn upsert_is_case_insensitive_and_refreshes_display_name() {
        let mut r = roster();
        let a = r.upsert_player("KenKixDD");
        let b = r.upsert_player("kenkixdd");
        assert_eq!(a, b);
        assert_eq!(r.player_count(), 1);
        // The latest casing wins.
        assert_eq!(r.player(a).unwrap().display_name, "kenkixdd");
        assert_eq!(r.find_player("KENKIXDD"), Some(a));
    }

    #[test]
    fn player_ids_are_dense_and_ordered() {
        let mut r = roster();
        let a = r.upsert_player("alpha");
        let b = r.upsert_player("beta");
        assert_eq!(a, PlayerId(0));
        assert_eq!(b, PlayerId(1));
        let names: Vec<&str> = r.players().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn availability_is_replaced_wholesale() {
        let mut r = roster();
        let p = r.upsert_player("alpha");
        r.set_availability(p, [Slot::new(0, 1), Slot::new(0, 2)]).unwrap();
        r.set_availability(p, [Slot::new(3, 7)]).unwrap();
        let avail: Vec<Slot> = r.availability(p).unwrap().iter().copied().collect();
        assert_eq!(avail, vec![Slot::new(3, 7)]);
    }

    #[test]
    fn out_of_grid_point_rejects_whole_submission() {
        let mut r = roster();
        let p = r.upsert_player("alpha");
        r.set_availability(p, [Slot::new(0, 1)]).unwrap();
        let err = r.set_availability(p, [Slot::new(1, 2), Slot::new(9, 0)]);
        assert!(matches!(err, Err(RosterError::Grid(_))));
        // The previous calendar is untouched.
        assert_eq!(r.availability(p).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_name_rejected_per_activity() {
        let mut r = roster();
        let p = r.upsert_player("alpha");
        r.add_character(p, "Main", "Sorc", 1680, RAID).unwrap();
        // Same name, same activity, different casing: rejected.
        let err = r.add_character(p, "MAIN", "Sorc", 1681, RAID);
        assert!(matches!(err, Err(RosterError::DuplicateCharacter { .. })));
        // Same name on another activity is fine under PerActivity.
        r.add_character(p, "Main", "Sorc", 1680, OTHER_RAID).unwrap();
    }

    #[test]
    fn per_player_policy_rejects_across_activities() {
        let mut r = Roster::new(week_grid(), NamePolicy::PerPlayer);
        let p = r.upsert_player("alpha");
        r.add_character(p, "Main", "Sorc", 1680, RAID).unwrap();
        let err = r.add_character(p, "main", "Bard", 1690, OTHER_RAID);
        assert!(matches!(err, Err(RosterError::DuplicateCharacter { .. })));
    }

    #[test]
    fn character_ids_encode_registration_order() {
        let mut r = roster();
        let a = r.upsert_player("alpha");
        let b = r.upsert_player("beta");
        let c1 = r.add_character(a, "One", "Sorc", 1680, RAID).unwrap();
        let c2 = r.add_character(b, "Two", "Bard", 1680, RAID).unwrap();
        let c3 = r.add_character(a, "Three", "Sorc", 1680, RAID).unwrap();
        assert!(c1 < c2 && c2 < c3);
        assert_eq!(r.character(a, c3).unwrap().name, "Three");
        assert!(r.character(b, c3).is_none());
    }

    #[test]
    fn clear_week_keeps_identities() {
        let mut r = roster();
        let p = r.upsert_player("alpha");
        r.add_character(p, "Main", "Sorc", 1680, RAID).unwrap();
        r.set_availability(p, [Slot::new(0, 1)]).unwrap();

        r.clear_week();

        assert_eq!(r.player_count(), 1);
        assert_eq!(r.find_player("alpha"), Some(p));
        assert!(r.characters(p).unwrap().is_empty());
        assert!(r.availability(p).unwrap().is_empty());
    }

    #[test]
    fn unknown_player_errors() {
        let mut r = roster();
        let ghost = PlayerId(42);
        assert!(matches!(
            r.set_availability(ghost, [Slot::new(0, 0)]),
            Err(RosterError::UnknownPlayer(_))
        ));
        assert!(matches!(
            r.add_character(ghost, "X", "Sorc", 1680, RAID),
            Err(RosterError::UnknownPlayer(_))
        ));
    }
}

// ── Activity validation ──────────────────────────────────────────────────────

mod activity_config {
    use super::*;

    #[test]
    fn valid_matched_activity() {
        let act = Activity::matched(RAID, "Aegir Normal", 1660, RoleQuota::new(2, 6), RoleQuota::new(1, 3));
        assert!(act.validate().is_ok());
        assert!(!act.is_fixed());
    }

    #[test]
    fn zero_role_full_quota_rejected() {
        let act = Activity::matched(RAID, "Bad", 0, RoleQuota::new(0, 8), RoleQuota::new(0, 4));
        assert!(matches!(act.validate(), Err(RosterError::InvalidActivity { .. })));
    }

    #[test]
    fn partial_exceeding_full_rejected() {
        let act = Activity::matched(RAID, "Bad", 0, RoleQuota::new(2, 6), RoleQuota::new(3, 3));
        assert!(matches!(act.validate(), Err(RosterError::InvalidActivity { .. })));
    }

    #[test]
    fn empty_partial_rejected() {
        let act = Activity::matched(RAID, "Bad", 0, RoleQuota::new(2, 6), RoleQuota::new(0, 0));
        assert!(act.validate().is_err());
    }

    #[test]
    fn empty_fixed_roster_rejected() {
        let act = Activity::fixed(RAID, "Static", vec![]);
        assert!(act.validate().is_err());
        let act = Activity::fixed(RAID, "Static", vec![FixedMember::new("kenkixdd", "Paladin")]);
        assert!(act.validate().is_ok());
        assert!(matches!(act.kind, ActivityKind::Fixed { .. }));
    }
}

// ── CSV loaders ──────────────────────────────────────────────────────────────

mod loaders {
    use super::*;

    const CHARACTERS: &str = "\
player,character,class,power,activity
alpha,HolyAlpha,Paladin,1690,0
alpha,AltAlpha,Sorc,1665,0
beta,Beta,Souleater,1672,1
";

    const AVAILABILITY: &str = "\
player,day,start_tick,end_tick
alpha,0,36,40
alpha,2,10,12
beta,0,38,44
";

    #[test]
    fn characters_round_trip() {
        let mut r = roster();
        let loaded = load_characters_reader(Cursor::new(CHARACTERS), &mut r).unwrap();
        assert_eq!(loaded, 3);
        assert_eq!(r.player_count(), 2);

        let alpha = r.find_player("alpha").unwrap();
        let chars = r.characters(alpha).unwrap();
        assert_eq!(chars.len(), 2);
        assert_eq!(chars[0].name, "HolyAlpha");
        assert_eq!(chars[0].power_level, 1690);
        assert_eq!(chars[1].activity, ActivityId(0));
    }

    #[test]
    fn availability_rows_accumulate_then_replace() {
        let mut r = roster();
        load_availability_reader(Cursor::new(AVAILABILITY), &mut r).unwrap();

        let alpha = r.find_player("alpha").unwrap();
        // 36..=40 (5 points) + 10..=12 (3 points).
        assert_eq!(r.availability(alpha).unwrap().len(), 8);

        // Loading again replaces instead of merging.
        let again = "player,day,start_tick,end_tick\nalpha,4,0,1\n";
        load_availability_reader(Cursor::new(again), &mut r).unwrap();
        let avail: Vec<Slot> = r.availability(alpha).unwrap().iter().copied().collect();
        assert_eq!(avail, vec![Slot::new(4, 0), Slot::new(4, 1)]);
    }

    #[test]
    fn duplicate_row_surfaces_roster_error() {
        let csv = "\
player,character,class,power,activity
alpha,Main,Sorc,1680,0
alpha,main,Sorc,1681,0
";
        let mut r = roster();
        let err = load_characters_reader(Cursor::new(csv), &mut r);
        assert!(matches!(err, Err(RosterError::DuplicateCharacter { .. })));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "player,character,class,power,activity\nalpha,Main,Sorc,not-a-number,0\n";
        let mut r = roster();
        assert!(matches!(
            load_characters_reader(Cursor::new(csv), &mut r),
            Err(RosterError::Parse(_))
        ));
    }

    #[test]
    fn out_of_grid_range_is_a_grid_error() {
        let csv = "player,day,start_tick,end_tick\nalpha,7,0,4\n";
        let mut r = roster();
        assert!(matches!(
            load_availability_reader(Cursor::new(csv), &mut r),
            Err(RosterError::Grid(_))
        ));
    }
}
