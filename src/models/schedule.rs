//! Schedule encoding.
//!
//! A schedule is an execution order: a vector of task ids intended to be
//! a permutation of `0..task_count`. The position of a task fixes both
//! when its finish time is computed and which processor it lands on
//! (position `i` → processor `i mod P`, applied by the evaluator).
//!
//! Construction is deliberately unchecked — random search mutates orders
//! freely — and validity is asserted where it matters, at evaluation.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an execution order is not a valid schedule for a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The order cannot cover every task exactly once.
    #[error("schedule has {found} entries, graph has {expected} tasks")]
    LengthMismatch {
        /// Tasks in the graph.
        expected: usize,
        /// Entries in the schedule.
        found: usize,
    },
    /// The order names an id outside `0..task_count`.
    #[error("schedule names unknown task {id} ({count} tasks)")]
    UnknownTask {
        /// The offending id.
        id: usize,
        /// Tasks in the graph.
        count: usize,
    },
    /// The order names a task more than once.
    #[error("task {id} appears more than once in the schedule")]
    DuplicateTask {
        /// The repeated id.
        id: usize,
    },
}

/// An execution order over a task graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    order: Vec<usize>,
}

impl Schedule {
    /// The in-id-order schedule `0, 1, .., task_count-1`.
    pub fn identity(task_count: usize) -> Self {
        Self {
            order: (0..task_count).collect(),
        }
    }

    /// A uniformly random permutation of `0..task_count`.
    pub fn random<R: Rng>(task_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..task_count).collect();
        order.shuffle(rng);
        Self { order }
    }

    /// Wraps an arbitrary order without checking it.
    ///
    /// Evaluation rejects non-permutations; see [`Schedule::validate`].
    pub fn from_order(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The task ids in execution order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Iterates over the task ids in execution order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the schedule holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `task` in the order, if present.
    pub fn position_of(&self, task: usize) -> Option<usize> {
        self.order.iter().position(|&t| t == task)
    }

    /// Exchanges the entries at positions `a` and `b`.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Re-permutes the existing entries uniformly at random, in place.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
    }

    /// Checks that this order is a permutation of `0..task_count`.
    pub fn validate(&self, task_count: usize) -> Result<(), ScheduleError> {
        if self.order.len() != task_count {
            return Err(ScheduleError::LengthMismatch {
                expected: task_count,
                found: self.order.len(),
            });
        }

        let mut seen = vec![false; task_count];
        for &task in &self.order {
            if task >= task_count {
                return Err(ScheduleError::UnknownTask {
                    id: task,
                    count: task_count,
                });
            }
            if seen[task] {
                return Err(ScheduleError::DuplicateTask { id: task });
            }
            seen[task] = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity_order() {
        let schedule = Schedule::identity(5);
        assert_eq!(schedule.order(), &[0, 1, 2, 3, 4]);
        assert!(schedule.validate(5).is_ok());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let schedule = Schedule::random(9, &mut rng);
            assert!(schedule.validate(9).is_ok());
        }
    }

    #[test]
    fn test_reshuffle_preserves_elements() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut schedule = Schedule::random(9, &mut rng);

        let mut before: Vec<usize> = schedule.order().to_vec();
        schedule.reshuffle(&mut rng);
        let mut after: Vec<usize> = schedule.order().to_vec();

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert!(schedule.validate(9).is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let schedule = Schedule::from_order(vec![0, 1, 2]);
        assert_eq!(
            schedule.validate(4),
            Err(ScheduleError::LengthMismatch {
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn test_validate_unknown_task() {
        let schedule = Schedule::from_order(vec![0, 1, 7]);
        assert_eq!(
            schedule.validate(3),
            Err(ScheduleError::UnknownTask { id: 7, count: 3 })
        );
    }

    #[test]
    fn test_validate_duplicate_task() {
        let schedule = Schedule::from_order(vec![0, 1, 1]);
        assert_eq!(
            schedule.validate(3),
            Err(ScheduleError::DuplicateTask { id: 1 })
        );
    }

    #[test]
    fn test_swap_and_position() {
        let mut schedule = Schedule::identity(4);
        assert_eq!(schedule.position_of(3), Some(3));

        schedule.swap(0, 3);
        assert_eq!(schedule.order(), &[3, 1, 2, 0]);
        assert_eq!(schedule.position_of(3), Some(0));
        assert_eq!(schedule.position_of(9), None);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::identity(0);
        assert!(schedule.is_empty());
        assert!(schedule.validate(0).is_ok());
    }
}
