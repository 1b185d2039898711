//! Run configuration — solver knobs and filter toggles.

use crate::filters::FilterToggles;
use serde::{Deserialize, Serialize};

/// Tunables for one scheduling run. Every field has a serde default, so
/// a plan file only names what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Target number of monitors working remote on any one day.
    pub max_remotes_per_day: u32,
    /// Trials with the full filter chain before escalating.
    pub try_cnt1: u32,
    /// Trials with only the hard filters before forcing.
    pub try_cnt2: u32,
    /// Forced remote trials to pick the best partial result from.
    pub try_cnt3: u32,
    pub filters: FilterToggles,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_remotes_per_day: 2,
            try_cnt1: 1000,
            try_cnt2: 1000,
            try_cnt3: 300,
            filters: FilterToggles::default(),
        }
    }
}

impl RosterConfig {
    /// Config with trimmed trial budgets for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            try_cnt1: 50,
            try_cnt2: 50,
            try_cnt3: 20,
            ..Self::default()
        }
    }
}
