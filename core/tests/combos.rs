//! Combo generation — ordered triples with a fix specialist anchoring
//! every morning pair.

use roster_core::combo::{gen_monitor_combos, MonitorCombo};
use roster_core::monitor::{Monitor, Roster};
use roster_core::types::MonitorId;

fn roster(members: &[(&str, bool)]) -> Roster {
    Roster::new(
        members
            .iter()
            .map(|&(name, fix)| Monitor {
                name: name.into(),
                is_fix_specialist: fix,
            })
            .collect(),
    )
    .unwrap()
}

fn combo(am1: usize, am2: usize, pm: usize) -> MonitorCombo {
    MonitorCombo {
        am1: MonitorId(am1),
        am2: MonitorId(am2),
        pm: MonitorId(pm),
    }
}

#[test]
fn fewer_than_three_monitors_yield_no_combos() {
    let roster = roster(&[("A", true), ("B", true)]);
    assert!(gen_monitor_combos(&roster).is_empty());
}

#[test]
fn three_monitors_one_specialist() {
    let roster = roster(&[("A", true), ("B", false), ("C", false)]);
    let combos = gen_monitor_combos(&roster);

    // A must sit in AM1 or AM2; only four of the six permutations qualify.
    let expected = [combo(0, 1, 2), combo(1, 0, 2), combo(0, 2, 1), combo(2, 0, 1)];
    assert_eq!(combos.len(), expected.len());
    for want in expected {
        assert!(combos.contains(&want), "missing {want:?}");
    }
}

#[test]
fn three_monitors_all_specialists() {
    let roster = roster(&[("A", true), ("B", true), ("C", true)]);
    let combos = gen_monitor_combos(&roster);
    assert_eq!(combos.len(), 6);
}

#[test]
fn four_monitors_two_specialists() {
    let roster = roster(&[("A", true), ("B", true), ("C", false), ("D", false)]);
    let combos = gen_monitor_combos(&roster);

    // 4P3 = 24 permutations, minus the four whose morning pair is C/D.
    assert_eq!(combos.len(), 20);
    for c in &combos {
        assert_ne!(c.am1, c.am2);
        assert_ne!(c.am1, c.pm);
        assert_ne!(c.am2, c.pm);
        assert!(
            roster.get(c.am1).is_fix_specialist || roster.get(c.am2).is_fix_specialist,
            "unanchored morning pair in {c:?}"
        );
    }
}
