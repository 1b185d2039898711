//! Quota allocation — fair distribution of role-day ceilings.
//!
//! Both allocations run once per run, before either solver, and the
//! resulting ceilings are read-only afterwards.

use crate::monitor::Roster;
use crate::rng::RosterRng;
use crate::role::Role;
use crate::schedule::ScheduleState;
use crate::types::MonitorId;
use std::collections::HashSet;

/// Distribute `days` duty-days of each role in `roles` across the roster.
///
/// Every monitor receives `days / n` per role. The `days % n` leftover
/// slots go to randomly chosen monitors for the first role and, for each
/// later role, to the monitors with the lowest cumulative ceiling so far,
/// so the bonus slots rotate instead of piling onto the same monitors.
/// Per role the ceilings sum to `days`, and the cross-role totals of any
/// two monitors differ by at most one.
pub fn assign_role_maxes(
    state: &mut ScheduleState,
    roster: &Roster,
    roles: &[Role],
    days: usize,
    rng: &mut RosterRng,
) {
    let n = roster.len();
    let base = (days / n) as u32;
    let extra = days % n;

    if extra == 0 {
        for id in roster.ids() {
            for &role in roles {
                state.monitor_mut(id).set_quota(role, base);
            }
        }
        return;
    }

    let mut cumulative = vec![0u32; n];
    for (round, &role) in roles.iter().enumerate() {
        let bonus: HashSet<MonitorId> = if round == 0 {
            rng.sample_indices(n, extra)
                .into_iter()
                .map(MonitorId)
                .collect()
        } else {
            let totals: Vec<(MonitorId, u32)> =
                roster.ids().map(|id| (id, cumulative[id.0])).collect();
            pick_lowest_totals(&totals, extra, rng).into_iter().collect()
        };
        for id in roster.ids() {
            let quota = base + u32::from(bonus.contains(&id));
            state.monitor_mut(id).set_quota(role, quota);
            cumulative[id.0] += quota;
        }
        log::debug!("quota: {role} ceiling base={base}, {extra} bonus slot(s)");
    }
}

/// Fair-deficit selection: choose `find_num` monitors with the lowest
/// running totals. Monitors strictly below the threshold total are always
/// taken; monitors exactly at the threshold are sampled uniformly, in
/// roster order, to fill the remainder.
fn pick_lowest_totals(
    totals: &[(MonitorId, u32)],
    find_num: usize,
    rng: &mut RosterRng,
) -> Vec<MonitorId> {
    debug_assert!(find_num >= 1 && find_num <= totals.len());
    let mut sorted: Vec<u32> = totals.iter().map(|&(_, total)| total).collect();
    sorted.sort_unstable();
    // The total at which the running count first reaches find_num.
    let threshold = sorted[find_num - 1];

    let mut picked: Vec<MonitorId> = Vec::with_capacity(find_num);
    let mut tied: Vec<MonitorId> = Vec::new();
    for &(id, total) in totals {
        if total < threshold {
            picked.push(id);
        } else if total == threshold {
            tied.push(id);
        }
    }
    let remainder = find_num - picked.len();
    for idx in rng.sample_indices(tied.len(), remainder) {
        picked.push(tied[idx]);
    }
    picked
}

/// Distribute the remote-day budget across monitors without a manual
/// override, then discount days already lost to pre-seeded absences.
///
/// The budget is `days * max_remotes_per_day` minus the manually set
/// quotas; a non-positive budget zeroes every open monitor. Pre-existing
/// `OTHER` days do not consume remote budget, so each open monitor's
/// quota is reduced by its absence count, floored at zero.
pub fn assign_remote_max(
    state: &mut ScheduleState,
    roster: &Roster,
    days: usize,
    max_remotes_per_day: u32,
    manual: &HashSet<MonitorId>,
    rng: &mut RosterRng,
) {
    let manual_total: i64 = manual
        .iter()
        .map(|&id| i64::from(state.monitor(id).quota(Role::Remote)))
        .sum();
    let budget = days as i64 * i64::from(max_remotes_per_day) - manual_total;

    let open: Vec<MonitorId> = roster.ids().filter(|id| !manual.contains(id)).collect();
    if open.is_empty() {
        return;
    }

    if budget <= 0 {
        for &id in &open {
            state.monitor_mut(id).set_quota(Role::Remote, 0);
        }
    } else {
        let base = (budget as u64 / open.len() as u64) as u32;
        let extra = (budget as u64 % open.len() as u64) as usize;
        let bonus: HashSet<usize> = rng.sample_indices(open.len(), extra).into_iter().collect();
        for (pos, &id) in open.iter().enumerate() {
            let quota = base + u32::from(bonus.contains(&pos));
            state.monitor_mut(id).set_quota(Role::Remote, quota);
        }
    }

    for &id in &open {
        let absences = state.monitor(id).count(Role::Other);
        let quota = state.monitor(id).quota(Role::Remote);
        state
            .monitor_mut(id)
            .set_quota(Role::Remote, quota.saturating_sub(absences));
    }
    log::debug!(
        "quota: remote budget {budget} over {} open monitor(s)",
        open.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> RosterRng {
        RosterRng::from_seed(7)
    }

    #[test]
    fn strictly_lower_totals_are_always_picked() {
        let totals = vec![
            (MonitorId(0), 2),
            (MonitorId(1), 9),
            (MonitorId(2), 9),
            (MonitorId(3), 9),
        ];
        let picked = pick_lowest_totals(&totals, 2, &mut rng());
        assert_eq!(picked.len(), 2);
        assert!(picked.contains(&MonitorId(0)));
    }

    #[test]
    fn ties_at_the_threshold_fill_the_remainder() {
        let totals = vec![
            (MonitorId(0), 5),
            (MonitorId(1), 3),
            (MonitorId(2), 3),
            (MonitorId(3), 4),
        ];
        let picked = pick_lowest_totals(&totals, 2, &mut rng());
        assert_eq!(picked.len(), 2);
        assert!(picked.contains(&MonitorId(1)));
        assert!(picked.contains(&MonitorId(2)));
    }
}
