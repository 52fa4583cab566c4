//! Decoded schedule for presentation.
//!
//! The search itself only needs the scalar cost of an order; callers
//! presenting a result need the full decode: which task runs at which
//! position on which processor, and the finish-time traces behind the
//! cost. [`ScheduleReport`] carries exactly that and nothing else — how
//! it is printed or serialized onward is the consumer's business.

use serde::{Deserialize, Serialize};

/// One row of a decoded schedule: the task at a position and the
/// processor that position maps to (`processor == position % P`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Position in the execution order.
    pub position: usize,
    /// Task id at this position.
    pub task: usize,
    /// Round-robin processor for this position.
    pub processor: usize,
}

/// Full decode of an execution order against a task graph.
///
/// Produced by [`MakespanEvaluator::report`](super::MakespanEvaluator::report);
/// `makespan()` always equals what `evaluate` returns for the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    assignments: Vec<Assignment>,
    task_finish: Vec<u64>,
    processor_finish: Vec<u64>,
    makespan: u64,
}

impl ScheduleReport {
    pub(crate) fn new(
        assignments: Vec<Assignment>,
        task_finish: Vec<u64>,
        processor_finish: Vec<u64>,
        makespan: u64,
    ) -> Self {
        Self {
            assignments,
            task_finish,
            processor_finish,
            makespan,
        }
    }

    /// All rows, in position order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Rows landing on the given processor, in position order.
    pub fn assignments_for_processor(&self, processor: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.processor == processor)
            .collect()
    }

    /// Computed finish time of the task with the given id.
    ///
    /// # Panics
    /// Panics if `task` is out of range.
    pub fn task_finish(&self, task: usize) -> u64 {
        self.task_finish[task]
    }

    /// Finish times of every task, indexed by task id.
    pub fn task_finish_times(&self) -> &[u64] {
        &self.task_finish
    }

    /// Running-maximum finish time of the given processor.
    ///
    /// # Panics
    /// Panics if `processor` is out of range.
    pub fn processor_finish(&self, processor: usize) -> u64 {
        self.processor_finish[processor]
    }

    /// Finish times of every processor, indexed by processor.
    pub fn processor_finish_times(&self) -> &[u64] {
        &self.processor_finish
    }

    /// Number of processors the order was decoded against.
    pub fn processor_count(&self) -> usize {
        self.processor_finish.len()
    }

    /// Cost of the order: the least-loaded processor finish, clamped
    /// from below by the evaluator's floor.
    pub fn makespan(&self) -> u64 {
        self.makespan
    }
}
