//! Task graph model.
//!
//! An immutable collection of tasks indexed by dense integer ids. The
//! graph is built once, validated on construction, and then passed by
//! reference into evaluation and search. Construction rejects:
//! - Duplicate or out-of-range task ids
//! - Dependency edges referencing tasks outside the graph
//! - Self-dependencies
//!
//! Cycles between distinct tasks are *not* rejected: the makespan walk
//! is order-sensitive and reads a zero finish time for any task not yet
//! visited, so cyclic inputs still evaluate. [`TaskGraph::is_acyclic`]
//! is offered as a diagnostic only.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (DFS)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Dependency, Task};

/// A structural defect detected while building a [`TaskGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two tasks declare the same id.
    #[error("duplicate task id {id}")]
    DuplicateTaskId {
        /// The id declared more than once.
        id: usize,
    },
    /// A task id falls outside `0..task_count`.
    #[error("task id {id} out of range for {count} tasks")]
    TaskIdOutOfRange {
        /// The offending id.
        id: usize,
        /// Number of tasks in the graph.
        count: usize,
    },
    /// A dependency references an id outside `0..task_count`.
    #[error("task {task} depends on unknown task {dependency} ({count} tasks)")]
    DependencyOutOfRange {
        /// The task declaring the edge.
        task: usize,
        /// The referenced id.
        dependency: usize,
        /// Number of tasks in the graph.
        count: usize,
    },
    /// A task depends on itself.
    #[error("task {task} depends on itself")]
    SelfDependency {
        /// The task declaring the edge.
        task: usize,
    },
}

/// An immutable task graph: tasks with processing times and dependency
/// edges carrying communication delays.
///
/// After construction the task at index `i` of the internal storage has
/// id `i`, so lookups are plain indexing. Deserialization goes through
/// [`TaskGraph::new`], so a decoded graph is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaskGraph")]
pub struct TaskGraph {
    tasks: Vec<Task>,
}

/// Wire shape of a [`TaskGraph`] before validation.
#[derive(Deserialize)]
struct RawTaskGraph {
    tasks: Vec<Task>,
}

impl TryFrom<RawTaskGraph> for TaskGraph {
    type Error = GraphError;

    fn try_from(raw: RawTaskGraph) -> Result<Self, GraphError> {
        Self::new(raw.tasks)
    }
}

impl TaskGraph {
    /// Builds a graph from a task list.
    ///
    /// Ids must cover `0..tasks.len()` exactly (any order); every
    /// dependency must reference an id in that range and differ from
    /// the declaring task. Fails on the first defect found.
    pub fn new(tasks: Vec<Task>) -> Result<Self, GraphError> {
        let count = tasks.len();
        let mut seen = vec![false; count];

        for task in &tasks {
            if task.id >= count {
                return Err(GraphError::TaskIdOutOfRange { id: task.id, count });
            }
            if seen[task.id] {
                return Err(GraphError::DuplicateTaskId { id: task.id });
            }
            seen[task.id] = true;

            for dep in &task.dependencies {
                if dep.task >= count {
                    return Err(GraphError::DependencyOutOfRange {
                        task: task.id,
                        dependency: dep.task,
                        count,
                    });
                }
                if dep.task == task.id {
                    return Err(GraphError::SelfDependency { task: task.id });
                }
            }
        }

        // Store in id order so accessors are direct indexing.
        let mut tasks = tasks;
        tasks.sort_by_key(|t| t.id);
        Ok(Self { tasks })
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the graph holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task with the given id.
    ///
    /// # Panics
    /// Panics if `id >= task_count()`.
    pub fn task(&self, id: usize) -> &Task {
        &self.tasks[id]
    }

    /// Processing time of the task with the given id.
    ///
    /// # Panics
    /// Panics if `id >= task_count()`.
    pub fn processing_time(&self, id: usize) -> u64 {
        self.tasks[id].processing_time
    }

    /// Dependency edges of the task with the given id, in declaration order.
    ///
    /// # Panics
    /// Panics if `id >= task_count()`.
    pub fn dependencies(&self, id: usize) -> &[Dependency] {
        &self.tasks[id].dependencies
    }

    /// All tasks, in id order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the dependency structure is free of cycles.
    ///
    /// Diagnostic only: evaluation never requires acyclicity. DFS with
    /// back-edge detection over the dependency edges.
    pub fn is_acyclic(&self) -> bool {
        let count = self.tasks.len();
        let mut visited = vec![false; count];
        let mut in_stack = vec![false; count];

        for id in 0..count {
            if !visited[id] && self.has_cycle_dfs(id, &mut visited, &mut in_stack) {
                return false;
            }
        }
        true
    }

    fn has_cycle_dfs(&self, id: usize, visited: &mut [bool], in_stack: &mut [bool]) -> bool {
        visited[id] = true;
        in_stack[id] = true;

        for dep in &self.tasks[id].dependencies {
            if in_stack[dep.task] {
                return true; // Back edge → cycle
            }
            if !visited[dep.task] && self.has_cycle_dfs(dep.task, visited, in_stack) {
                return true;
            }
        }

        in_stack[id] = false;
        false
    }

    /// A small reference workload: nine tasks on a diamond-ish precedence
    /// structure with communication delays between 1 and 20 time units.
    ///
    /// Useful for demos and as a shared test instance. With two
    /// processors and a floor of 5, the identity ordering costs 14.
    pub fn sample() -> Self {
        let tasks = vec![
            Task::new(0, 2)
                .with_dependency(1, 4)
                .with_dependency(2, 1)
                .with_dependency(3, 1)
                .with_dependency(6, 20)
                .with_dependency(4, 1),
            Task::new(1, 3)
                .with_dependency(5, 1)
                .with_dependency(6, 5)
                .with_dependency(7, 5),
            Task::new(2, 3).with_dependency(6, 5).with_dependency(7, 1),
            Task::new(3, 4).with_dependency(7, 1),
            Task::new(4, 5).with_dependency(7, 10),
            Task::new(5, 4).with_dependency(8, 10),
            Task::new(6, 4).with_dependency(8, 10),
            Task::new(7, 4).with_dependency(8, 10),
            Task::new(8, 1),
        ];
        // Construction cannot fail: ids are dense and edges in range.
        match Self::new(tasks) {
            Ok(graph) => graph,
            Err(_) => unreachable!("sample workload is well-formed"),
        }
    }
}
