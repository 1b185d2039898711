//! Monitors and the interned roster table.

use crate::error::{RosterError, RosterResult};
use crate::types::MonitorId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A roster member. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monitor {
    pub name: String,
    /// Qualified to anchor a morning duty pair; every accepted combo
    /// needs a specialist in AM1 or AM2.
    pub is_fix_specialist: bool,
}

/// The fixed roster for one run. Monitors are interned once; everything
/// downstream works with `MonitorId` indices into this table, and roster
/// order is the deterministic iteration order everywhere.
#[derive(Debug, Clone)]
pub struct Roster {
    monitors: Vec<Monitor>,
    by_name: HashMap<String, MonitorId>,
}

impl Roster {
    pub fn new(monitors: Vec<Monitor>) -> RosterResult<Self> {
        if monitors.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        let mut by_name = HashMap::with_capacity(monitors.len());
        for (idx, monitor) in monitors.iter().enumerate() {
            if by_name.insert(monitor.name.clone(), MonitorId(idx)).is_some() {
                return Err(RosterError::DuplicateMonitor {
                    name: monitor.name.clone(),
                });
            }
        }
        Ok(Self { monitors, by_name })
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    pub fn get(&self, id: MonitorId) -> &Monitor {
        &self.monitors[id.0]
    }

    /// Fail-fast lookup: any configuration naming a monitor outside the
    /// roster is rejected before solving begins.
    pub fn id_of(&self, name: &str) -> RosterResult<MonitorId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RosterError::UnknownMonitor {
                name: name.to_string(),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = MonitorId> {
        (0..self.monitors.len()).map(MonitorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonitorId, &Monitor)> {
        self.monitors
            .iter()
            .enumerate()
            .map(|(idx, monitor)| (MonitorId(idx), monitor))
    }
}

/// A group of monitors that may not all be away from the office on the
/// same day — at least one member must stay in.
#[derive(Debug, Clone)]
pub struct OfficeGroup {
    pub members: Vec<MonitorId>,
}
