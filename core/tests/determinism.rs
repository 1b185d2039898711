//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two schedulers, same seed, same plan.
//! They must produce byte-identical grids.
//! Any divergence is a blocker — do not merge until fixed.

use chrono::{Datelike, NaiveDate, Weekday};
use roster_core::config::RosterConfig;
use roster_core::input::{PrefilledEntry, RosterPlan};
use roster_core::monitor::Monitor;
use roster_core::role::Role;
use roster_core::scheduler::Scheduler;
use std::collections::BTreeMap;

fn build_plan() -> RosterPlan {
    let monitors = [
        ("Asada", true),
        ("Baba", true),
        ("Chiba", true),
        ("Doi", false),
        ("Endo", false),
        ("Fuji", false),
    ]
    .iter()
    .map(|&(name, fix)| Monitor {
        name: name.into(),
        is_fix_specialist: fix,
    })
    .collect();

    let mut days = Vec::new();
    let mut day = NaiveDate::from_ymd_opt(2020, 4, 6).unwrap();
    while days.len() < 10 {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day = day.succ_opt().unwrap();
    }

    RosterPlan {
        monitors,
        office_groups: vec![vec!["Endo".into(), "Fuji".into()]],
        days: days.clone(),
        prefilled: vec![
            PrefilledEntry {
                monitor: "Doi".into(),
                day: days[2],
                role: Role::Other,
            },
            PrefilledEntry {
                monitor: "Asada".into(),
                day: days[4],
                role: Role::Pm,
            },
        ],
        remote_quota_overrides: BTreeMap::from([("Chiba".into(), 1u32)]),
        config: RosterConfig::default_test(),
    }
}

#[test]
fn same_seed_produces_identical_grids() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let outcome_a = Scheduler::new(build_plan(), SEED).unwrap().run();
    let outcome_b = Scheduler::new(build_plan(), SEED).unwrap().run();

    let json_a = serde_json::to_string(&outcome_a).unwrap();
    let json_b = serde_json::to_string(&outcome_b).unwrap();
    assert_eq!(json_a, json_b, "same seed + same plan must replay exactly");
}

#[test]
fn different_seeds_produce_different_grids() {
    let outcome_a = Scheduler::new(build_plan(), 42).unwrap().run();
    let outcome_b = Scheduler::new(build_plan(), 99).unwrap().run();

    let grid_a = serde_json::to_string(&outcome_a.grid).unwrap();
    let grid_b = serde_json::to_string(&outcome_b.grid).unwrap();
    assert_ne!(
        grid_a, grid_b,
        "different seeds produced identical grids — the seed is not being used"
    );
}
