//! The population search loop.
//!
//! Seeding produces one population of random candidates; each round then
//! scores every candidate, merges the scores into the elitist
//! [`BestTracker`], and rewrites every order with the configured
//! [`PerturbStrategy`]. After the iteration budget the tracker's record
//! is the result.
//!
//! # Parallelism
//!
//! Scoring is a data-parallel map over candidates; improvements are
//! merged into the tracker afterwards in candidate order, which is the
//! reduction form of per-worker local bests — there is no lock contended
//! per evaluation. Perturbation draws from per-candidate RNG streams
//! keyed by round and index, so for a fixed seed the parallel and
//! sequential paths return identical results.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ScheduleError;
use crate::scheduler::MakespanEvaluator;

use super::glowworm::{seed_population, stream_rng, Glowworm};
use super::{BestRecord, BestTracker, PerturbStrategy};

/// Why a search could not run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The iteration budget or population size is zero.
    #[error("search needs a positive iteration budget and population size")]
    NoCandidates,
    /// A candidate order failed the evaluator's permutation check.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Search parameters.
///
/// The baseline couples population size to the iteration budget: one
/// candidate slot per round. Builders override the coupling, the seed,
/// the parallel path, and the perturbation strategy.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    /// Number of evaluate-and-perturb rounds.
    pub iterations: usize,
    /// Number of candidates kept between rounds.
    pub population_size: usize,
    /// Base seed; `None` draws one from entropy at run start.
    pub seed: Option<u64>,
    /// Whether scoring and perturbation run data-parallel.
    pub parallel: bool,
    /// How candidate orders are rewritten between rounds.
    pub perturb: PerturbStrategy,
}

impl SwarmConfig {
    /// A baseline configuration: `iterations` rounds over an equally
    /// sized population, entropy-seeded, parallel, resampling.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            population_size: iterations,
            seed: None,
            parallel: true,
            perturb: PerturbStrategy::default(),
        }
    }

    /// Decouples the population size from the iteration budget.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Fixes the base seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects the parallel or sequential execution path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Selects the perturbation strategy.
    pub fn with_perturb(mut self, perturb: PerturbStrategy) -> Self {
        self.perturb = perturb;
        self
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best candidate found across all rounds.
    pub best: BestRecord,
    /// Rounds executed.
    pub rounds: usize,
    /// Total candidate evaluations performed.
    pub evaluations: usize,
    /// Tracker cost after each round; non-increasing.
    pub best_history: Vec<u64>,
}

/// Executes the search loop.
pub struct SwarmRunner;

impl SwarmRunner {
    /// Runs the configured search against an evaluator.
    ///
    /// Fails with [`SearchError::NoCandidates`] when the iteration
    /// budget or population size is zero; otherwise the loop always
    /// terminates after exactly `config.iterations` rounds.
    pub fn run(
        evaluator: &MakespanEvaluator<'_>,
        config: &SwarmConfig,
    ) -> Result<SearchResult, SearchError> {
        if config.iterations == 0 || config.population_size == 0 {
            return Err(SearchError::NoCandidates);
        }

        let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let task_count = evaluator.graph().task_count();
        log::debug!(
            "swarm search: {} rounds x {} candidates, {} tasks on {} processors, seed {base_seed:#x}",
            config.iterations,
            config.population_size,
            task_count,
            evaluator.processors(),
        );

        let mut population = seed_population(config.population_size, task_count, base_seed);
        let mut tracker = BestTracker::new();
        let mut best_history = Vec::with_capacity(config.iterations);
        let mut evaluations = 0usize;

        for round in 0..config.iterations {
            Self::evaluate_population(evaluator, &mut population, config.parallel)?;
            evaluations += population.len();

            // Candidate-order merge: the earliest strict improvement
            // wins ties, same as a sequential scan would.
            for worm in &population {
                if tracker.consider(&worm.schedule, worm.cost) {
                    log::debug!("round {round}: new best makespan {}", worm.cost);
                }
            }
            if let Some(record) = tracker.current() {
                best_history.push(record.makespan);
                log::trace!("round {round}: best so far {}", record.makespan);
            }

            Self::perturb_population(&mut population, config, base_seed, round);
        }

        match tracker.into_best() {
            Some(best) => Ok(SearchResult {
                best,
                rounds: config.iterations,
                evaluations,
                best_history,
            }),
            None => Err(SearchError::NoCandidates),
        }
    }

    fn evaluate_population(
        evaluator: &MakespanEvaluator<'_>,
        population: &mut [Glowworm],
        parallel: bool,
    ) -> Result<(), ScheduleError> {
        if parallel {
            let costs = population
                .par_iter()
                .map(|worm| evaluator.evaluate(&worm.schedule))
                .collect::<Result<Vec<_>, _>>()?;
            for (worm, cost) in population.iter_mut().zip(costs) {
                worm.cost = cost;
            }
        } else {
            for worm in population.iter_mut() {
                worm.cost = evaluator.evaluate(&worm.schedule)?;
            }
        }
        Ok(())
    }

    fn perturb_population(
        population: &mut [Glowworm],
        config: &SwarmConfig,
        base_seed: u64,
        round: usize,
    ) {
        // Attraction targets come from the pre-perturbation snapshot.
        let snapshot = match config.perturb {
            PerturbStrategy::Attraction { .. } => population.to_vec(),
            PerturbStrategy::Resample => Vec::new(),
        };

        let rewrite = |index: usize, worm: &mut Glowworm| {
            let mut rng = stream_rng(base_seed, round as u64 + 1, index as u64);
            config
                .perturb
                .perturb(worm.cost, &snapshot, &mut worm.schedule, &mut rng);
            worm.cost = u64::MAX;
        };

        if config.parallel {
            population
                .par_iter_mut()
                .enumerate()
                .for_each(|(index, worm)| rewrite(index, worm));
        } else {
            for (index, worm) in population.iter_mut().enumerate() {
                rewrite(index, worm);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskGraph;

    fn sample_evaluator(graph: &TaskGraph) -> MakespanEvaluator<'_> {
        MakespanEvaluator::new(graph, 2, 5)
    }

    #[test]
    fn test_search_on_sample_stays_within_bounds() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(100).with_seed(42);

        let result = SwarmRunner::run(&evaluator, &config).unwrap();
        // The identity ordering costs 14, so a 100x100 search lands at
        // or below it; the floor bounds it from below.
        assert!(result.best.makespan >= 5);
        assert!(result.best.makespan <= 14);
        assert_eq!(result.rounds, 100);
        assert_eq!(result.evaluations, 100 * 100);
    }

    #[test]
    fn test_best_schedule_reevaluates_to_recorded_cost() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(30).with_seed(7);

        let result = SwarmRunner::run(&evaluator, &config).unwrap();
        assert!(result.best.schedule.validate(graph.task_count()).is_ok());
        assert_eq!(
            evaluator.evaluate(&result.best.schedule).unwrap(),
            result.best.makespan
        );
    }

    #[test]
    fn test_best_history_is_non_increasing() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(50).with_seed(3);

        let result = SwarmRunner::run(&evaluator, &config).unwrap();
        assert_eq!(result.best_history.len(), 50);
        for window in result.best_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(*result.best_history.last().unwrap(), result.best.makespan);
    }

    #[test]
    fn test_zero_budgets_are_rejected() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);

        let err = SwarmRunner::run(&evaluator, &SwarmConfig::new(0)).unwrap_err();
        assert_eq!(err, SearchError::NoCandidates);

        let config = SwarmConfig::new(10).with_population_size(0);
        let err = SwarmRunner::run(&evaluator, &config).unwrap_err();
        assert_eq!(err, SearchError::NoCandidates);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);

        let parallel = SwarmRunner::run(
            &evaluator,
            &SwarmConfig::new(40).with_seed(11).with_parallel(true),
        )
        .unwrap();
        let sequential = SwarmRunner::run(
            &evaluator,
            &SwarmConfig::new(40).with_seed(11).with_parallel(false),
        )
        .unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(25).with_seed(99);

        let first = SwarmRunner::run(&evaluator, &config).unwrap();
        let second = SwarmRunner::run(&evaluator, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_attraction_strategy_search() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(60)
            .with_seed(13)
            .with_perturb(PerturbStrategy::Attraction { moves: 3 });

        let result = SwarmRunner::run(&evaluator, &config).unwrap();
        assert!(result.best.makespan >= 5);
        assert!(result.best.schedule.validate(graph.task_count()).is_ok());
        for window in result.best_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_decoupled_population_size() {
        let graph = TaskGraph::sample();
        let evaluator = sample_evaluator(&graph);
        let config = SwarmConfig::new(20).with_population_size(5).with_seed(1);

        let result = SwarmRunner::run(&evaluator, &config).unwrap();
        assert_eq!(result.rounds, 20);
        assert_eq!(result.evaluations, 20 * 5);
    }

    #[test]
    fn test_config_defaults() {
        let config = SwarmConfig::new(100);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.seed, None);
        assert!(config.parallel);
        assert_eq!(config.perturb, PerturbStrategy::Resample);
    }
}
