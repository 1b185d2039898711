//! End-to-end solver behavior: combo commitment, manual pins, adjacency
//! and office-presence invariants, gap filling, and fail-fast input
//! validation.

use chrono::{Datelike, NaiveDate, Weekday};
use roster_core::config::RosterConfig;
use roster_core::duty_solver;
use roster_core::error::RosterError;
use roster_core::input::{PrefilledEntry, RosterPlan};
use roster_core::monitor::Monitor;
use roster_core::role::Role;
use roster_core::schedule::ScheduleState;
use roster_core::scheduler::{fill_gaps, RosterOutcome, Scheduler};
use roster_core::types::MonitorId;
use std::collections::BTreeMap;

fn monitors(members: &[(&str, bool)]) -> Vec<Monitor> {
    members
        .iter()
        .map(|&(name, fix)| Monitor {
            name: name.into(),
            is_fix_specialist: fix,
        })
        .collect()
}

/// `n` business days starting Monday 2020-04-06, weekends skipped.
fn business_days(n: usize) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = NaiveDate::from_ymd_opt(2020, 4, 6).unwrap();
    while days.len() < n {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day = day.succ_opt().unwrap();
    }
    days
}

fn plan(members: &[(&str, bool)], days: usize) -> RosterPlan {
    RosterPlan {
        monitors: monitors(members),
        office_groups: Vec::new(),
        days: business_days(days),
        prefilled: Vec::new(),
        remote_quota_overrides: BTreeMap::new(),
        config: RosterConfig::default_test(),
    }
}

fn day_roles(outcome: &RosterOutcome, day: NaiveDate) -> Vec<Role> {
    outcome
        .grid
        .iter()
        .find(|row| row.day == day)
        .map(|row| row.roles.clone())
        .unwrap()
}

#[test]
fn single_day_commits_one_combo() {
    // One specialist, one day: the committed combo must anchor A in a
    // morning slot. The quota ceilings cannot matter for a single day,
    // so that filter is switched off to isolate combo selection.
    let mut plan = plan(&[("A", true), ("B", false), ("C", false)], 1);
    plan.config.max_remotes_per_day = 0;
    plan.config.filters.monitoring_max = false;

    let outcome = Scheduler::new(plan, 21).unwrap().run();
    let day = business_days(1)[0];
    let roles = day_roles(&outcome, day);

    for role in [Role::Am1, Role::Am2, Role::Pm] {
        assert_eq!(
            roles.iter().filter(|&&r| r == role).count(),
            1,
            "{role} must be held by exactly one monitor"
        );
    }
    let a_role = outcome.role_of("A", day).unwrap();
    assert!(a_role.is_am(), "the only specialist must hold a morning slot");
    assert_eq!(outcome.unresolved_remote_days, 0);
}

#[test]
fn three_days_rotate_every_role_once() {
    // 3 monitors x 3 days with even quotas: each monitor ends up holding
    // each monitoring role exactly once.
    let mut plan = plan(&[("A", true), ("B", true), ("C", false)], 3);
    plan.config.max_remotes_per_day = 0;

    let outcome = Scheduler::new(plan, 5).unwrap().run();
    for summary in &outcome.summaries {
        assert_eq!(summary.am1, 1, "{}", summary.name);
        assert_eq!(summary.am2, 1, "{}", summary.name);
        assert_eq!(summary.pm, 1, "{}", summary.name);
        assert_eq!(summary.monitoring_total, 3, "{}", summary.name);
    }
}

#[test]
fn prefilled_absence_is_never_scheduled() {
    let members = [("A", true), ("B", true), ("C", true), ("D", false)];
    let days = business_days(5);
    let absent_day = days[1];
    let mut plan = plan(&members, 5);
    plan.config.max_remotes_per_day = 0;
    plan.prefilled.push(PrefilledEntry {
        monitor: "D".into(),
        day: absent_day,
        role: Role::Other,
    });

    let outcome = Scheduler::new(plan, 13).unwrap().run();
    assert_eq!(outcome.role_of("D", absent_day), Some(Role::Other));
}

#[test]
fn prefilled_monitoring_role_is_pinned() {
    let members = [("A", true), ("B", true), ("C", true), ("D", false)];
    let days = business_days(5);
    let pinned_day = days[0];
    let mut plan = plan(&members, 5);
    plan.config.max_remotes_per_day = 0;
    plan.prefilled.push(PrefilledEntry {
        monitor: "B".into(),
        day: pinned_day,
        role: Role::Pm,
    });

    let outcome = Scheduler::new(plan, 17).unwrap().run();
    assert_eq!(outcome.role_of("B", pinned_day), Some(Role::Pm));
    let pm_count = day_roles(&outcome, pinned_day)
        .iter()
        .filter(|&&r| r == Role::Pm)
        .count();
    assert_eq!(pm_count, 1, "the pinned PM slot must not be double-filled");
}

#[test]
fn adjacency_restrictions_hold_when_solvable() {
    // Roomy instance (6 monitors, 10 days): the full chain is satisfiable,
    // so the committed grid must respect every adjacency restriction.
    let members = [
        ("A", true),
        ("B", true),
        ("C", true),
        ("D", true),
        ("E", true),
        ("F", true),
    ];
    let mut plan = plan(&members, 10);
    plan.config = RosterConfig::default();
    plan.config.max_remotes_per_day = 0;

    let outcome = Scheduler::new(plan, 99).unwrap().run();

    for idx in 0..outcome.monitors.len() {
        for pair in outcome.grid.windows(2) {
            // Only calendar-adjacent dates are restricted; the weekend
            // gap between Friday and Monday is free.
            if pair[1].day != pair[0].day.succ_opt().unwrap() {
                continue;
            }
            let today = pair[0].roles[idx];
            let tomorrow = pair[1].roles[idx];
            let name = &outcome.monitors[idx];
            assert!(
                !(today.is_am() && tomorrow.is_am()),
                "{name} holds AM roles on consecutive days"
            );
            assert!(
                !(today == Role::Pm && tomorrow.is_am()),
                "{name} holds PM then AM on consecutive days"
            );
            assert!(
                !(today == Role::Pm && tomorrow == Role::Pm),
                "{name} holds PM on consecutive days"
            );
        }
    }
}

#[test]
fn office_group_keeps_one_member_in() {
    let members = [
        ("A", true),
        ("B", true),
        ("C", true),
        ("D", false),
        ("E", false),
        ("F", false),
    ];
    let mut plan = plan(&members, 10);
    plan.office_groups.push(vec!["E".into(), "F".into()]);

    let outcome = Scheduler::new(plan, 31).unwrap().run();

    for row in &outcome.grid {
        let away = ["E", "F"]
            .iter()
            .filter(|&&name| {
                outcome
                    .role_of(name, row.day)
                    .is_some_and(Role::is_away_from_office)
            })
            .count();
        assert!(away < 2, "office group fully absent on {}", row.day);
    }
}

#[test]
fn remote_max_toggle_controls_the_quota_filter() {
    // All five monitors carry a manual remote quota of zero. With the
    // quota filter active no remote day can ever be placed; with it
    // disabled the solver fills one remote slot per day regardless.
    let members = [
        ("A", true),
        ("B", true),
        ("C", true),
        ("D", true),
        ("E", true),
    ];
    let overrides: BTreeMap<String, u32> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|&name| (name.to_string(), 0u32))
        .collect();

    let mut strict = plan(&members, 5);
    strict.config.max_remotes_per_day = 1;
    strict.remote_quota_overrides = overrides.clone();
    let outcome = Scheduler::new(strict, 23).unwrap().run();
    assert_eq!(outcome.unresolved_remote_days, 5);
    for summary in &outcome.summaries {
        assert_eq!(summary.remote, 0);
    }

    let mut relaxed = plan(&members, 5);
    relaxed.config.max_remotes_per_day = 1;
    relaxed.remote_quota_overrides = overrides;
    relaxed.config.filters.remote_max = false;
    let outcome = Scheduler::new(relaxed, 23).unwrap().run();
    assert_eq!(outcome.unresolved_remote_days, 0);
    for row in &outcome.grid {
        let remotes = row.roles.iter().filter(|&&r| r == Role::Remote).count();
        assert_eq!(remotes, 1, "expected one remote on {}", row.day);
    }
}

#[test]
fn remote_quota_bounds_hold() {
    let members = [
        ("A", true),
        ("B", true),
        ("C", true),
        ("D", true),
        ("E", false),
        ("F", false),
    ];
    let mut plan = plan(&members, 10);
    plan.config.max_remotes_per_day = 1;

    let outcome = Scheduler::new(plan, 77).unwrap().run();
    for summary in &outcome.summaries {
        assert!(
            summary.remote <= summary.remote_quota,
            "{} exceeded its remote quota",
            summary.name
        );
    }
    for row in &outcome.grid {
        let remotes = row.roles.iter().filter(|&&r| r == Role::Remote).count();
        assert!(remotes <= 1, "too many remotes on {}", row.day);
    }
}

#[test]
fn gap_fill_is_idempotent_and_complete() {
    let days = business_days(3);
    let mut state = ScheduleState::new(3);
    state.assign(MonitorId(0), days[0], Role::Am1);
    state.assign(MonitorId(1), days[1], Role::Other);

    fill_gaps(&mut state, &days, Role::Normal);
    let once = state.clone();
    fill_gaps(&mut state, &days, Role::Normal);
    assert_eq!(once, state, "a second gap-fill pass must change nothing");

    assert_eq!(state.role_on(MonitorId(0), days[0]), Some(Role::Am1));
    assert_eq!(state.role_on(MonitorId(1), days[1]), Some(Role::Other));
    for &day in &days {
        for idx in 0..3 {
            assert!(state.role_on(MonitorId(idx), day).is_some());
        }
    }
}

#[test]
fn constrained_days_are_solved_first() {
    let days = business_days(3);
    let mut state = ScheduleState::new(2);
    // Day 1: one monitoring pre-fill (-2). Day 2: one absence (-1).
    state.assign(MonitorId(0), days[1], Role::Other);
    state.assign(MonitorId(1), days[2], Role::Am1);

    let ordered = duty_solver::day_priority_order(&state, &days);
    assert_eq!(ordered, vec![days[2], days[1], days[0]]);
}

#[test]
fn unknown_names_fail_before_solving() {
    let mut with_group = plan(&[("A", true), ("B", false), ("C", false)], 2);
    with_group.office_groups.push(vec!["A".into(), "Z".into()]);
    assert!(matches!(
        Scheduler::new(with_group, 1),
        Err(RosterError::UnknownMonitor { name }) if name == "Z"
    ));

    let mut with_prefill = plan(&[("A", true), ("B", false), ("C", false)], 2);
    with_prefill.prefilled.push(PrefilledEntry {
        monitor: "Q".into(),
        day: business_days(1)[0],
        role: Role::Other,
    });
    assert!(matches!(
        Scheduler::new(with_prefill, 1),
        Err(RosterError::UnknownMonitor { name }) if name == "Q"
    ));

    let mut with_override = plan(&[("A", true), ("B", false), ("C", false)], 2);
    with_override
        .remote_quota_overrides
        .insert("X".into(), 1);
    assert!(matches!(
        Scheduler::new(with_override, 1),
        Err(RosterError::UnknownMonitor { name }) if name == "X"
    ));
}

#[test]
fn malformed_rosters_are_rejected() {
    let duplicated = plan(&[("A", true), ("A", false), ("B", false)], 2);
    assert!(matches!(
        Scheduler::new(duplicated, 1),
        Err(RosterError::DuplicateMonitor { name }) if name == "A"
    ));

    let empty = plan(&[], 2);
    assert!(matches!(
        Scheduler::new(empty, 1),
        Err(RosterError::EmptyRoster)
    ));
}
