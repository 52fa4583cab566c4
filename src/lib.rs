//! Stochastic makespan optimization for precedence-linked task graphs.
//!
//! Assigns a fixed set of communicating tasks to a small pool of
//! identical processors via round-robin over an execution order, and
//! searches the space of orders with a glowworm-style population loop
//! that keeps an elitist best-so-far record. This is offline planning:
//! nothing here executes tasks or coordinates a runtime.
//!
//! # Modules
//!
//! - **`models`**: Problem data — `TaskGraph` (tasks, durations,
//!   dependency edges with communication delays) and the
//!   permutation-encoded `Schedule`
//! - **`scheduler`**: `MakespanEvaluator`, the pure order-to-cost
//!   function, and `ScheduleReport` for presenting a decoded result
//! - **`swarm`**: Population search — seeding, perturbation strategies,
//!   best tracking, and the `SwarmRunner` loop
//!
//! # Cost semantics
//!
//! The evaluator walks tasks strictly in schedule order over zero-filled
//! finish times, so a dependency appearing later in the order contributes
//! only its communication delay, and the final cost is the *least*
//! loaded processor's finish clamped by a floor. Both behaviors are part
//! of the evaluator's contract; see `scheduler` for details.
//!
//! # Example
//!
//! ```
//! use glowsched::models::TaskGraph;
//! use glowsched::scheduler::MakespanEvaluator;
//! use glowsched::swarm::{SwarmConfig, SwarmRunner};
//!
//! let graph = TaskGraph::sample();
//! let evaluator = MakespanEvaluator::new(&graph, 2, 5);
//! let config = SwarmConfig::new(100).with_seed(42);
//!
//! let result = SwarmRunner::run(&evaluator, &config)?;
//! assert!(result.best.makespan >= 5 && result.best.makespan <= 14);
//! # Ok::<(), glowsched::swarm::SearchError>(())
//! ```
//!
//! # References
//!
//! - Kwok & Ahmad (1999), "Static Scheduling Algorithms for Allocating
//!   Directed Task Graphs to Multiprocessors"
//! - Krishnanand & Ghose (2009), "Glowworm swarm optimization"

pub mod models;
pub mod scheduler;
pub mod swarm;
