//! Scheduling domain models.
//!
//! Core data types for multiprocessor task scheduling with communication
//! delays: the immutable [`TaskGraph`] problem instance and the
//! permutation-encoded [`Schedule`] candidate solution.
//!
//! # Domain Mappings
//!
//! | glowsched | Compiler backends | Cluster computing | Embedded |
//! |-----------|-------------------|-------------------|----------|
//! | Task | Basic block | Job stage | ISR / kernel |
//! | Dependency delay | Register transfer | Network transfer | Bus transfer |
//! | Processor | Functional unit | Node | Core |

mod graph;
mod schedule;
mod task;

pub use graph::{GraphError, TaskGraph};
pub use schedule::{Schedule, ScheduleError};
pub use task::{Dependency, Task};
