//! Shared primitive types used across the entire engine.

/// A business day. The calendar is expanded and filtered for weekends
/// and holidays by the loader; the engine never inspects weekday or
/// holiday status itself.
pub type Day = chrono::NaiveDate;

/// Master seed for one scheduling run.
pub type Seed = u64;

/// Index of a monitor in the run's roster. Stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub usize);
