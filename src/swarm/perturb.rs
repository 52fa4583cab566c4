//! Runtime-selectable perturbation strategies.
//!
//! After each scoring round every candidate's order is rewritten for the
//! next round. The baseline is [`PerturbStrategy::Resample`]: a fresh
//! uniform permutation per candidate, discarding all positional
//! information — independent resampling with an elitist best record, not
//! a swarm movement. [`PerturbStrategy::Attraction`] is the opt-in
//! glowworm behavior: dim candidates copy positions from a brighter one.

use rand::Rng;

use crate::models::Schedule;

use super::Glowworm;

/// How a candidate's order is rewritten between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbStrategy {
    /// Replace the order with a fresh uniform permutation of itself.
    Resample,
    /// Align `moves` random positions with a uniformly chosen strictly
    /// brighter (lower-cost) candidate; falls back to resampling when
    /// no brighter candidate exists.
    Attraction {
        /// Positions aligned with the chosen target per round.
        moves: usize,
    },
}

impl Default for PerturbStrategy {
    fn default() -> Self {
        Self::Resample
    }
}

impl PerturbStrategy {
    /// Rewrites `schedule` for the next round.
    ///
    /// `own_cost` is the candidate's score this round and `snapshot` the
    /// pre-perturbation population it may attract toward; `Resample`
    /// ignores both.
    pub fn perturb<R: Rng>(
        &self,
        own_cost: u64,
        snapshot: &[Glowworm],
        schedule: &mut Schedule,
        rng: &mut R,
    ) {
        match *self {
            Self::Resample => resample(schedule, rng),
            Self::Attraction { moves } => {
                let brighter: Vec<&Glowworm> =
                    snapshot.iter().filter(|g| g.cost < own_cost).collect();
                if brighter.is_empty() {
                    resample(schedule, rng);
                } else {
                    let target = brighter[rng.random_range(0..brighter.len())];
                    attract(schedule, &target.schedule, moves, rng);
                }
            }
        }
    }
}

/// Replaces the order with a fresh uniform permutation of its elements.
pub fn resample<R: Rng>(schedule: &mut Schedule, rng: &mut R) {
    schedule.reshuffle(rng);
}

/// Moves `schedule` toward `target` by aligning `moves` random positions.
///
/// Each alignment is realized as a swap, so a permutation stays a
/// permutation. An already-aligned position is never disturbed by a
/// later move.
pub fn attract<R: Rng>(schedule: &mut Schedule, target: &Schedule, moves: usize, rng: &mut R) {
    let len = schedule.len();
    if len < 2 || target.len() != len {
        return;
    }

    for _ in 0..moves {
        let position = rng.random_range(0..len);
        let wanted = target.order()[position];
        if let Some(current) = schedule.position_of(wanted) {
            if current != position {
                schedule.swap(position, current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn matches(a: &Schedule, b: &Schedule) -> usize {
        a.order()
            .iter()
            .zip(b.order())
            .filter(|(x, y)| x == y)
            .count()
    }

    #[test]
    fn test_resample_preserves_elements() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut schedule = Schedule::from_order(vec![4, 2, 0, 3, 1]);
        resample(&mut schedule, &mut rng);
        assert!(schedule.validate(5).is_ok());
    }

    #[test]
    fn test_attract_moves_toward_target() {
        let mut rng = SmallRng::seed_from_u64(42);
        let target = Schedule::identity(9);
        let mut schedule = Schedule::from_order(vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);

        let before = matches(&schedule, &target);
        attract(&mut schedule, &target, 4, &mut rng);
        let after = matches(&schedule, &target);

        assert!(after > before);
        assert!(schedule.validate(9).is_ok());
    }

    #[test]
    fn test_attract_never_unaligns() {
        let mut rng = SmallRng::seed_from_u64(42);
        let target = Schedule::identity(9);
        let mut schedule = Schedule::from_order(vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);

        let mut aligned = matches(&schedule, &target);
        for _ in 0..100 {
            attract(&mut schedule, &target, 1, &mut rng);
            let now = matches(&schedule, &target);
            assert!(now >= aligned);
            aligned = now;
        }
        // Enough single moves converge on the target itself.
        assert_eq!(schedule, target);
    }

    #[test]
    fn test_attract_ignores_mismatched_lengths() {
        let mut rng = SmallRng::seed_from_u64(42);
        let target = Schedule::identity(4);
        let mut schedule = Schedule::from_order(vec![2, 1, 0]);
        let before = schedule.clone();

        attract(&mut schedule, &target, 5, &mut rng);
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_strategy_attraction_picks_brighter_target() {
        let mut rng = SmallRng::seed_from_u64(42);
        let bright = Glowworm {
            schedule: Schedule::identity(5),
            cost: 3,
        };
        let snapshot = vec![bright.clone()];

        let mut schedule = Schedule::from_order(vec![4, 3, 2, 1, 0]);
        let strategy = PerturbStrategy::Attraction { moves: 5 };
        let before = matches(&schedule, &bright.schedule);
        strategy.perturb(10, &snapshot, &mut schedule, &mut rng);

        assert!(matches(&schedule, &bright.schedule) > before);
        assert!(schedule.validate(5).is_ok());
    }

    #[test]
    fn test_strategy_attraction_falls_back_to_resample() {
        let mut rng = SmallRng::seed_from_u64(42);
        // Nobody is strictly brighter than cost 3.
        let snapshot = vec![Glowworm {
            schedule: Schedule::identity(5),
            cost: 3,
        }];

        let mut schedule = Schedule::from_order(vec![4, 3, 2, 1, 0]);
        let strategy = PerturbStrategy::Attraction { moves: 2 };
        strategy.perturb(3, &snapshot, &mut schedule, &mut rng);
        assert!(schedule.validate(5).is_ok());
    }

    #[test]
    fn test_default_strategy_is_resample() {
        assert_eq!(PerturbStrategy::default(), PerturbStrategy::Resample);
    }
}
