//! Duty assignment — fills AM1/AM2/PM for every business day.
//!
//! Randomized retry instead of backtracking: each trial clones the
//! authoritative state, walks the days in priority order, and commits a
//! random surviving combo per day. A day with no survivor kills the
//! whole trial. Escalation drops the soft filters, and a final forced
//! pass tolerates leaving days unassigned.

use crate::combo::MonitorCombo;
use crate::config::RosterConfig;
use crate::filters::{duty_predicates, FilterTier};
use crate::rng::RosterRng;
use crate::role::Role;
use crate::schedule::ScheduleState;
use crate::types::Day;
use chrono::Datelike;

/// A day tagged with its solve priority; smaller solves earlier.
#[derive(Debug, Clone, Copy)]
struct DayPriority {
    day: Day,
    priority: i32,
}

/// Order days so the most pre-constrained ones are solved first — an
/// infeasible trial then fails fast. Every pre-filled entry lowers the
/// score (monitoring entries weigh double); a day with no pre-fills
/// falls back to its day-of-month. Ties keep calendar order.
pub fn day_priority_order(state: &ScheduleState, days: &[Day]) -> Vec<Day> {
    let mut scored: Vec<DayPriority> = days
        .iter()
        .map(|&day| {
            let mut priority = 0i32;
            for (_, ms) in state.iter() {
                match ms.role_on(day) {
                    Some(role) if role.is_monitoring() => priority -= 2,
                    Some(_) => priority -= 1,
                    None => {}
                }
            }
            if priority >= 0 {
                priority = day.day() as i32;
            }
            DayPriority { day, priority }
        })
        .collect();
    scored.sort_by_key(|dp| dp.priority);
    scored.into_iter().map(|dp| dp.day).collect()
}

/// Run the three-tier escalation and return the accepted state:
/// `try_cnt1` trials with the full chain, `try_cnt2` with the hard
/// filters only, then one forced hard-only pass that always completes
/// structurally but may leave gaps.
pub fn assign_monitors(
    state: &ScheduleState,
    combos: &[MonitorCombo],
    days: &[Day],
    config: &RosterConfig,
    rng: &mut RosterRng,
) -> ScheduleState {
    for trial in 0..config.try_cnt1 {
        let mut candidate = state.clone();
        if fill_duties(&mut candidate, combos, days, FilterTier::Soft, false, config, rng) {
            log::info!("duty solve: full chain succeeded on trial {}", trial + 1);
            return candidate;
        }
    }
    log::debug!(
        "duty solve: full chain exhausted after {} trials",
        config.try_cnt1
    );

    for trial in 0..config.try_cnt2 {
        let mut candidate = state.clone();
        if fill_duties(&mut candidate, combos, days, FilterTier::Hard, false, config, rng) {
            log::info!("duty solve: hard-only chain succeeded on trial {}", trial + 1);
            return candidate;
        }
    }
    log::warn!(
        "duty solve: all {} relaxed trials failed, forcing a partial assignment",
        config.try_cnt2
    );

    let mut candidate = state.clone();
    fill_duties(&mut candidate, combos, days, FilterTier::Hard, true, config, rng);
    candidate
}

/// One full pass over the days. Returns false as soon as a day has no
/// surviving combo, unless `force` is set, in which case the day is
/// left unassigned and the pass continues.
fn fill_duties(
    state: &mut ScheduleState,
    combos: &[MonitorCombo],
    days: &[Day],
    ceiling: FilterTier,
    force: bool,
    config: &RosterConfig,
    rng: &mut RosterRng,
) -> bool {
    for &day in days {
        let predicates = duty_predicates(state, day, ceiling, &config.filters);
        let survivors: Vec<MonitorCombo> = combos
            .iter()
            .filter(|combo| predicates.iter().all(|p| p.accepts(combo)))
            .copied()
            .collect();
        let Some(&combo) = rng.choose(&survivors) else {
            if force {
                continue;
            }
            return false;
        };
        state.assign(combo.am1, day, Role::Am1);
        state.assign(combo.am2, day, Role::Am2);
        state.assign(combo.pm, day, Role::Pm);
    }
    true
}
