//! roster-runner: headless duty roster generator.
//!
//! Usage:
//!   roster-runner --plan plan.json --seed 12345
//!   roster-runner --plan plan.json --seed 12345 --out grid.json

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use roster_core::config::RosterConfig;
use roster_core::input::{PrefilledEntry, RosterPlan};
use roster_core::monitor::Monitor;
use roster_core::role::Role;
use roster_core::scheduler::{RosterOutcome, Scheduler};
use std::collections::BTreeMap;
use std::env;

/// The JSON plan file as written by hand or exported from the team
/// calendar. Dates come as a range plus holidays; the runner expands
/// them into the business-day list the engine wants.
#[derive(serde::Deserialize)]
struct PlanFile {
    monitors: Vec<Monitor>,
    #[serde(default)]
    office_groups: Vec<Vec<String>>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    holidays: Vec<NaiveDate>,
    #[serde(default)]
    prefilled: Vec<PrefilledEntry>,
    #[serde(default)]
    remote_quota_overrides: BTreeMap<String, u32>,
    #[serde(default)]
    config: RosterConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let plan_path = args
        .windows(2)
        .find(|w| w[0] == "--plan")
        .map(|w| w[1].clone())
        .context("--plan <file> is required")?;
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone());

    let content = std::fs::read_to_string(&plan_path)
        .with_context(|| format!("cannot read {plan_path}"))?;
    let file: PlanFile =
        serde_json::from_str(&content).with_context(|| format!("cannot parse {plan_path}"))?;

    let days = business_days(file.start_date, file.end_date, &file.holidays);
    println!("roster-runner");
    println!("  plan:  {plan_path}");
    println!("  seed:  {seed}");
    println!(
        "  days:  {} business days ({} .. {})",
        days.len(),
        file.start_date,
        file.end_date
    );
    println!();

    let plan = RosterPlan {
        monitors: file.monitors,
        office_groups: file.office_groups,
        days,
        prefilled: file.prefilled,
        remote_quota_overrides: file.remote_quota_overrides,
        config: file.config,
    };

    let outcome = Scheduler::new(plan, seed)?.run();
    log::info!(
        "run complete: {} unresolved remote day(s)",
        outcome.unresolved_remote_days
    );

    print_grid(&outcome);
    print_summary(&outcome);

    if let Some(path) = out_path {
        std::fs::write(&path, serde_json::to_string_pretty(&outcome)?)
            .with_context(|| format!("cannot write {path}"))?;
        println!();
        println!("grid written to {path}");
    }

    Ok(())
}

/// Weekdays in `start..=end` that are not flagged as holidays.
fn business_days(start: NaiveDate, end: NaiveDate, holidays: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !holidays.contains(&day) {
            days.push(day);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

fn print_grid(outcome: &RosterOutcome) {
    println!("{:<10}: AM1, AM2, PM, N, R", "date");
    for row in &outcome.grid {
        let mut am1 = "";
        let mut am2 = "";
        let mut pm = "";
        let mut normals: Vec<&str> = Vec::new();
        let mut remotes: Vec<&str> = Vec::new();
        for (name, &role) in outcome.monitors.iter().zip(&row.roles) {
            match role {
                Role::Am1 => am1 = name.as_str(),
                Role::Am2 => am2 = name.as_str(),
                Role::Pm => pm = name.as_str(),
                Role::Normal => normals.push(name.as_str()),
                Role::Remote => remotes.push(name.as_str()),
                Role::Other => {}
            }
        }
        println!(
            "{}: {}, {}, {}, {}, {}",
            row.day,
            am1,
            am2,
            pm,
            normals.join(" & "),
            remotes.join(" & ")
        );
    }
    println!();
}

fn print_summary(outcome: &RosterOutcome) {
    println!("name, AM1, AM2, PM, SUM, N, R, R-quota");
    for s in &outcome.summaries {
        println!(
            "{}, {}, {}, {}, {}, {}, {}, {}",
            s.name, s.am1, s.am2, s.pm, s.monitoring_total, s.normal, s.remote, s.remote_quota
        );
    }
    if outcome.unresolved_remote_days > 0 {
        println!();
        println!(
            "WARNING: {} day(s) left without a full remote allocation",
            outcome.unresolved_remote_days
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
