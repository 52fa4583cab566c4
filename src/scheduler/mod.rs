//! Makespan evaluation and schedule decoding.
//!
//! Maps a permutation-encoded [`Schedule`](crate::models::Schedule) to a
//! scalar cost over a fixed [`TaskGraph`](crate::models::TaskGraph), with
//! round-robin processor assignment and communication delays priced into
//! task start times. `MakespanEvaluator` returns the bare cost for search
//! loops; `ScheduleReport` carries the full decode for presentation.
//!
//! # References
//!
//! - Kwok & Ahmad (1999), "Static Scheduling Algorithms for Allocating
//!   Directed Task Graphs to Multiprocessors"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod makespan;
mod report;

pub use makespan::MakespanEvaluator;
pub use report::{Assignment, ScheduleReport};
