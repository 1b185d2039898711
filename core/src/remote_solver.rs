//! Remote assignment — layers the remote-work role over the duty grid.
//!
//! Same escalation shape as the duty solver, with two deliberate
//! differences: the driver walks the per-day capacity downward and
//! reruns the escalation at each level, and the forced tier keeps the
//! best of many trials (fewest unsolved days) instead of the first.
//! The forced trials run with the full filter chain, unlike the duty
//! solver's hard-only forced pass.

use crate::config::RosterConfig;
use crate::filters::{remote_predicates, FilterTier};
use crate::monitor::OfficeGroup;
use crate::rng::RosterRng;
use crate::role::Role;
use crate::schedule::ScheduleState;
use crate::types::{Day, MonitorId};

/// Fill the remote role for up to `max_remotes_per_day` monitors per day.
/// Returns the accepted state plus the number of days left unresolved
/// (0 unless the forced tier had to run).
pub fn assign_remotes(
    state: &ScheduleState,
    groups: &[OfficeGroup],
    days: &[Day],
    config: &RosterConfig,
    rng: &mut RosterRng,
) -> (ScheduleState, u32) {
    if config.max_remotes_per_day == 0 {
        return (state.clone(), 0);
    }

    for capacity in (1..=config.max_remotes_per_day).rev() {
        for (ceiling, budget) in [
            (FilterTier::Soft, config.try_cnt1),
            (FilterTier::Hard, config.try_cnt2),
        ] {
            for trial in 0..budget {
                let mut candidate = state.clone();
                let solved = fill_remotes(
                    &mut candidate,
                    groups,
                    days,
                    capacity,
                    ceiling,
                    false,
                    config,
                    rng,
                );
                if solved == Some(0) {
                    log::info!(
                        "remote solve: capacity {capacity} resolved on trial {} ({ceiling:?} ceiling)",
                        trial + 1
                    );
                    return (candidate, 0);
                }
            }
            log::debug!(
                "remote solve: capacity {capacity}, {ceiling:?} ceiling exhausted after {budget} trials"
            );
        }
    }

    // Forced tier: best of try_cnt3 full-chain passes that skip dead days.
    log::warn!(
        "remote solve: no capacity level resolved, keeping the best of {} forced trials",
        config.try_cnt3
    );
    let mut best_state = state.clone();
    let mut best_skipped = u32::MAX;
    for _ in 0..config.try_cnt3.max(1) {
        let mut candidate = state.clone();
        // A forced pass always completes; its count is how many days it
        // gave up on.
        let skipped = fill_remotes(
            &mut candidate,
            groups,
            days,
            config.max_remotes_per_day,
            FilterTier::Soft,
            true,
            config,
            rng,
        )
        .unwrap_or(u32::MAX);
        if skipped < best_skipped {
            best_state = candidate;
            best_skipped = skipped;
            if best_skipped == 0 {
                break;
            }
        }
    }
    log::info!("remote solve: forced tier kept a result with {best_skipped} unresolved day(s)");
    (best_state, best_skipped)
}

/// One pass over the days at a fixed capacity target. Strict mode
/// returns `None` on the first day with no surviving candidate set;
/// force mode skips such days and reports how many it skipped.
#[allow(clippy::too_many_arguments)]
fn fill_remotes(
    state: &mut ScheduleState,
    groups: &[OfficeGroup],
    days: &[Day],
    capacity: u32,
    ceiling: FilterTier,
    force: bool,
    config: &RosterConfig,
    rng: &mut RosterRng,
) -> Option<u32> {
    let mut skipped = 0u32;
    for &day in days {
        let mut away = 0u32;
        let mut unassigned: Vec<MonitorId> = Vec::new();
        for (id, ms) in state.iter() {
            match ms.role_on(day) {
                None => unassigned.push(id),
                Some(role) if role.is_away_from_office() => away += 1,
                Some(_) => {}
            }
        }
        let need = capacity.saturating_sub(away) as usize;
        if need == 0 {
            continue;
        }

        let predicates = remote_predicates(state, day, groups, ceiling, &config.filters);
        let survivors: Vec<Vec<MonitorId>> = k_subsets(&unassigned, need)
            .into_iter()
            .filter(|set| predicates.iter().all(|p| p.accepts(set)))
            .collect();
        let Some(set) = rng.choose(&survivors) else {
            if force {
                skipped += 1;
                continue;
            }
            return None;
        };
        for &id in set {
            state.assign(id, day, Role::Remote);
        }
    }
    Some(skipped)
}

/// All subsets of exactly `k` items, in lexicographic index order.
fn k_subsets(items: &[MonitorId], k: usize) -> Vec<Vec<MonitorId>> {
    let n = items.len();
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| items[i]).collect());
        // Advance the rightmost index that still has room.
        let mut i = k;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if idx[i] < i + n - k {
                break;
            }
        }
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<MonitorId> {
        raw.iter().copied().map(MonitorId).collect()
    }

    #[test]
    fn enumerates_all_pairs() {
        let items = ids(&[0, 1, 2, 3]);
        let subsets = k_subsets(&items, 2);
        assert_eq!(subsets.len(), 6);
        assert_eq!(subsets.first(), Some(&ids(&[0, 1])));
        assert_eq!(subsets.last(), Some(&ids(&[2, 3])));
    }

    #[test]
    fn oversized_k_yields_nothing() {
        let items = ids(&[0, 1]);
        assert!(k_subsets(&items, 3).is_empty());
    }
}
