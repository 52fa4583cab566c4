//! Elitist best-so-far record.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// The best execution order seen so far and its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    /// Best execution order found.
    pub schedule: Schedule,
    /// Its evaluated cost.
    pub makespan: u64,
}

/// Monotonic register over candidate scores.
///
/// Starts empty (observationally, a best of `u64::MAX`) and replaces its
/// record only on strict improvement, so ties keep the earliest
/// candidate and the record never regresses. The recorded schedule is
/// cloned at update time and is never perturbed by the search.
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best: Option<BestRecord>,
}

impl BestTracker {
    /// An empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a scored candidate; stores a clone of it and returns
    /// `true` only on strict improvement over the current record.
    pub fn consider(&mut self, schedule: &Schedule, cost: u64) -> bool {
        let improved = match &self.best {
            Some(record) => cost < record.makespan,
            None => true,
        };
        if improved {
            self.best = Some(BestRecord {
                schedule: schedule.clone(),
                makespan: cost,
            });
        }
        improved
    }

    /// The current record, if any candidate was ever offered.
    pub fn current(&self) -> Option<&BestRecord> {
        self.best.as_ref()
    }

    /// Consumes the tracker and yields the record.
    pub fn into_best(self) -> Option<BestRecord> {
        self.best
    }
}
