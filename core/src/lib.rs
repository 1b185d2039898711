//! roster-core — randomized constraint-satisfaction duty roster engine.
//!
//! For every business day the engine fills two morning monitoring slots
//! and one afternoon slot from a fixed roster, then layers remote-work
//! days on top, subject to fairness quotas, the fix-specialist rule,
//! adjacency restrictions, and office-presence guarantees.
//!
//! RULES:
//!   - All randomness flows through one seeded RosterRng. A fixed seed
//!     and a fixed plan yield a byte-identical grid.
//!   - Solver trials run on private clones of ScheduleState; only a
//!     trial that fully succeeds (or is accepted as the best forced
//!     result) is promoted to authoritative state.
//!   - A cell once assigned is never rewritten within a run.

pub mod combo;
pub mod config;
pub mod duty_solver;
pub mod error;
pub mod filters;
pub mod input;
pub mod monitor;
pub mod quota;
pub mod remote_solver;
pub mod rng;
pub mod role;
pub mod schedule;
pub mod scheduler;
pub mod types;
