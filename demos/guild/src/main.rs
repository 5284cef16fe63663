//! guild — end-to-end demo for the raidgroups scheduler.
//!
//! Schedules one raid week for a small guild: three matched raids with
//! rising power floors plus one hand-curated fixed group, over a
//! Wednesday-to-Sunday calendar at 30-minute resolution.  The roster is
//! embedded as CSV so the demo is self-contained; swap in file paths and
//! `load_*_csv` to drive it from real data.

use std::io::Cursor;

use anyhow::Result;

use rg_core::{ActivityId, RoleRules, Slot, TimeGrid};
use rg_roster::{
    load_availability_reader, load_characters_reader, Activity, FixedMember, NamePolicy,
    RoleQuota, Roster,
};
use rg_schedule::{GroupAssignment, RunObserver, ScheduleError, Scheduler};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Day 0 = Wednesday: the weekly reset anchors the scheduling window.
const DAYS: [&str; 5] = ["Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const TICKS_PER_DAY: u16 = 48; // 30-minute ticks
const TICK_MINUTES: u32 = 30;

const AEGIR_NORMAL: ActivityId = ActivityId(0);
const BREL_NORMAL: ActivityId = ActivityId(1);
const AEGIR_HARD: ActivityId = ActivityId(2);
const BREL_HARD: ActivityId = ActivityId(3);

// ── Roster CSV ────────────────────────────────────────────────────────────────

// Activity 0 = Aegir Normal (1660), 1 = Brelshaza Normal (1670),
// 2 = Aegir Hardmode (1680).
const CHARACTERS_CSV: &str = "\
player,character,class,power,activity
kenkixdd,HolyKen,Paladin,1692,0
zitroone,Brushwork,Artist,1688,0
pastacino,Noodle,Sorc,1675,0
.__james__,Edgelord,Blade,1671,0
rareshandaric,Rare,Sorc,1669,0
beaume,Soulful,Souleater,1666,0
matnam,Cards,Arcana,1664,0
optitv,Boom,Destroyer,1662,0
kenkixdd,KenTwo,Bard,1684,1
pastacino,Spaghetti,Sorc,1678,1
beaume,SecondSoul,Souleater,1673,1
matnam,MoreCards,Arcana,1671,1
optitv,BiggerBoom,Destroyer,1670,1
zitroone,Inkling,Artist,1690,2
rareshandaric,Rarer,Sorc,1683,2
";

// Ticks: 36 = 18:00, 40 = 20:00, 44 = 22:00.
const AVAILABILITY_CSV: &str = "\
player,day,start_tick,end_tick
kenkixdd,3,36,44
zitroone,3,36,44
pastacino,3,40,44
.__james__,3,36,42
rareshandaric,3,40,44
beaume,3,36,44
matnam,3,40,46
optitv,3,40,44
kenkixdd,4,20,28
pastacino,4,20,26
beaume,4,22,28
matnam,4,20,24
optitv,4,20,28
zitroone,1,36,40
rareshandaric,1,36,40
";

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    groups: usize,
}

impl RunObserver for Progress {
    fn on_activity_start(&mut self, activity: &Activity, buckets: usize) {
        println!("· {} — {buckets} candidate slot(s)", activity.name);
    }

    fn on_group(&mut self, _group: &GroupAssignment) {
        self.groups += 1;
    }

    fn on_activity_skipped(&mut self, activity: &Activity, error: &ScheduleError) {
        eprintln!("! skipped {}: {error}", activity.name);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn slot_label(grid: TimeGrid, slot: Option<Slot>) -> String {
    match slot {
        Some(s) => {
            let minutes = s.tick as u32 * grid.tick_minutes;
            format!("{} {:02}:{:02}", DAYS[s.day as usize], minutes / 60, minutes % 60)
        }
        None => "fixed".to_string(),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let grid = TimeGrid::new(DAYS.len() as u8, TICKS_PER_DAY, TICK_MINUTES)?;
    let mut roster = Roster::new(grid, NamePolicy::PerActivity);
    load_characters_reader(Cursor::new(CHARACTERS_CSV), &mut roster)?;
    load_availability_reader(Cursor::new(AVAILABILITY_CSV), &mut roster)?;

    let eight = RoleQuota::new(2, 6);
    let four = RoleQuota::new(1, 3);
    let activities = vec![
        Activity::matched(AEGIR_NORMAL, "Aegir Normal", 1660, eight, four),
        Activity::matched(BREL_NORMAL, "Brelshaza Normal", 1670, eight, four),
        Activity::matched(AEGIR_HARD, "Aegir Hardmode", 1680, eight, four),
        Activity::fixed(
            BREL_HARD,
            "Brelshaza Hardmode",
            vec![
                FixedMember::new("kenkixdd", "Paladin"),
                FixedMember::new("zitroone", "Artist"),
                FixedMember::new("pastacino", "Sorc"),
                FixedMember::new(".__james__", "Blade"),
                FixedMember::new("rareshandaric", "Sorc"),
                FixedMember::new("beaume", "Souleater"),
                FixedMember::new("matnam", "Arcana"),
                FixedMember::new("optitv", "Destroyer"),
            ],
        ),
    ];

    let scheduler = Scheduler::new(RoleRules::default());
    let mut progress = Progress::default();
    let report = scheduler.run_with(&roster, &activities, &mut progress);

    println!();
    for activity in &activities {
        let mut any = false;
        for group in report.groups_for(activity.id) {
            if !any {
                println!("{}", activity.name);
                any = true;
            }
            println!("  {} group — {}", group.kind, slot_label(grid, group.slot));
            for member in &group.members {
                println!("    {} ({}, {})", member.character, member.class_name, member.display_name);
            }
        }
        if !any {
            println!("{} — no groups could be formed", activity.name);
        }
        println!();
    }

    println!(
        "{} group(s), {} activity(ies) skipped, {} stray availability point(s)",
        progress.groups,
        report.skipped.len(),
        report.dropped_points
    );
    Ok(())
}
