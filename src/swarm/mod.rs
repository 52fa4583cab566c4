//! Glowworm-style population search for low-cost execution orders.
//!
//! The swarm is a fixed-size population of candidate orders
//! ([`Glowworm`]s). Each round every candidate is scored by the
//! evaluator, the best score feeds an elitist [`BestTracker`], and every
//! order is rewritten by the configured [`PerturbStrategy`] before the
//! next round. The baseline strategy resamples every order from scratch,
//! making the search an elitist random search; neighbor attraction is
//! available as an opt-in extension.
//!
//! # Key Types
//!
//! - [`SwarmConfig`]: iteration budget, population size, seed, strategy
//! - [`SwarmRunner`]: executes the seeding/evaluation/perturbation loop
//! - [`SearchResult`]: best record plus per-round statistics
//!
//! # Reference
//! Krishnanand & Ghose (2009), "Glowworm swarm optimization for
//! simultaneous capture of multiple local optima"

mod best;
mod glowworm;
mod perturb;
mod search;

pub use best::{BestRecord, BestTracker};
pub use glowworm::{seed_population, Glowworm};
pub use perturb::{attract, resample, PerturbStrategy};
pub use search::{SearchError, SearchResult, SwarmConfig, SwarmRunner};
