//! Task model.
//!
//! A task is a unit of work with a fixed processing time and a list of
//! dependency edges. Each edge names another task and a communication
//! delay: this task may not start earlier than that delay after the
//! referenced task's recorded finish time.
//!
//! # Reference
//! Kwok & Ahmad (1999), "Static Scheduling Algorithms for Allocating
//! Directed Task Graphs to Multiprocessors", ACM Computing Surveys 31(4)

use serde::{Deserialize, Serialize};

/// A dependency edge carried by the waiting task.
///
/// `task` names the upstream task whose output this task consumes and
/// `delay` is the communication cost paid after that task finishes.
/// Edges live on the downstream (waiting) side, so a task's dependency
/// list is everything it waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Id of the upstream task.
    pub task: usize,
    /// Communication delay (time units) added after the upstream finish.
    pub delay: u64,
}

impl Dependency {
    /// Creates a dependency on `task` with the given communication delay.
    pub fn new(task: usize, delay: u64) -> Self {
        Self { task, delay }
    }
}

/// A task to be placed on a processor.
///
/// # Time Representation
/// All durations and delays are non-negative integers in abstract time
/// units; the consumer defines the unit (ms, cycles, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, expected to be dense in `0..task_count`.
    pub id: usize,
    /// Processing time (time units) on any processor.
    pub processing_time: u64,
    /// Dependency edges, in declaration order.
    pub dependencies: Vec<Dependency>,
}

impl Task {
    /// Creates a new task with the given id and processing time.
    pub fn new(id: usize, processing_time: u64) -> Self {
        Self {
            id,
            processing_time,
            dependencies: Vec::new(),
        }
    }

    /// Adds a dependency on `task` with the given communication delay.
    pub fn with_dependency(mut self, task: usize, delay: u64) -> Self {
        self.dependencies.push(Dependency::new(task, delay));
        self
    }

    /// Whether this task waits on any other task.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Number of dependency edges.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
