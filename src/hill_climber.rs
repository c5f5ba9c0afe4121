use std::fmt::Debug;

use bon::Builder;
use log::trace;
use rand::Rng;

use crate::{
    bitstring::Bitstring,
    error::SearchError,
    mutator::{BitFlip, Mutator},
    scorer::{CountOnes, Scorer},
    trajectory::Trajectory,
};

/// The outcome of a single hill climbing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult<Ge, Sc> {
    /// The genome after the last iteration.
    pub genome: Ge,
    /// The score of `genome`.
    pub score: Sc,
    /// The best score seen after each iteration.
    pub trajectory: Trajectory<Sc>,
}

#[derive(Debug, Builder)]
pub struct HillClimber<Mut, Scr> {
    /// How many times to apply the mutate-and-accept step.
    #[builder(default = 1_500)]
    num_iterations: usize,

    /// Do we _always_ replace the current solution with the mutated child,
    /// even if it isn't better than the current solution? The default is to
    /// only replace it when the child is strictly better, so ties are
    /// rejected.
    #[builder(default = false)]
    always_replace: bool,

    mutator: Mut,
    scorer: Scr,
}

impl<Mut, Scr> HillClimber<Mut, Scr> {
    /// Mutate `current` and decide whether the child replaces it.
    ///
    /// `current` is the genome together with its score, and the returned pair
    /// is whichever of the parent and child won.
    ///
    /// # Errors
    ///
    /// Returns the mutator's error if mutation fails.
    pub fn step<Ge, R>(
        &self,
        (genome, score): (Ge, Scr::Score),
        rng: &mut R,
    ) -> Result<(Ge, Scr::Score), Mut::Error>
    where
        Ge: Clone,
        Mut: Mutator<Ge>,
        Scr: Scorer<Ge>,
        Scr::Score: PartialOrd + Debug,
        R: Rng + ?Sized,
    {
        let child = self.mutator.mutate(genome.clone(), rng)?;
        let child_score = self.scorer.score(&child);

        if self.always_replace || child_score > score {
            trace!("Replacing parent with score {score:?} by child with score {child_score:?}");
            Ok((child, child_score))
        } else {
            Ok((genome, score))
        }
    }

    /// Run the hill climber for `num_iterations` steps starting at
    /// `initial_genome`.
    ///
    /// The trajectory holds a running maximum of the current score after each
    /// step. That maximum starts at `Score::default()` (zero for counts), so
    /// the first entry already reflects the score after the first step.
    ///
    /// # Errors
    ///
    /// Returns the mutator's error if any mutation fails.
    pub fn run<Ge, R>(
        &self,
        initial_genome: Ge,
        rng: &mut R,
    ) -> Result<RunResult<Ge, Scr::Score>, Mut::Error>
    where
        Ge: Clone,
        Mut: Mutator<Ge>,
        Scr: Scorer<Ge>,
        Scr::Score: Ord + Clone + Default + Debug,
        R: Rng + ?Sized,
    {
        let initial_score = self.scorer.score(&initial_genome);
        let mut current = (initial_genome, initial_score);

        let mut best_score = Scr::Score::default();
        let mut trajectory = Trajectory::with_capacity(self.num_iterations);

        for _ in 0..self.num_iterations {
            current = self.step(current, rng)?;
            if current.1 > best_score {
                best_score = current.1.clone();
            }
            trajectory.push(best_score.clone());
        }

        let (genome, score) = current;
        Ok(RunResult {
            genome,
            score,
            trajectory,
        })
    }
}

/// Propose a bit-flip mutation of `genome` and keep it only if it has
/// strictly more ones.
///
/// ```
/// # use counting_ones::{bitstring::Bitstring, hill_climber::mutate};
/// # use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(0);
/// let genome = Bitstring::from(vec![false]);
/// assert_eq!(mutate(genome, 1.0, &mut rng)?, Bitstring::from(vec![true]));
///
/// let genome = Bitstring::from(vec![true]);
/// assert_eq!(mutate(genome, 1.0, &mut rng)?, Bitstring::from(vec![true]));
/// # Ok::<(), counting_ones::error::SearchError>(())
/// ```
///
/// # Errors
///
/// Returns an error if `mutation_probability` isn't in `[0, 1]` or the genome
/// is empty.
pub fn mutate<R: Rng + ?Sized>(
    genome: Bitstring,
    mutation_probability: f64,
    rng: &mut R,
) -> Result<Bitstring, SearchError> {
    let hill_climber = HillClimber::builder()
        .num_iterations(1)
        .mutator(BitFlip::new(mutation_probability)?)
        .scorer(CountOnes)
        .build();
    let score = genome.count_ones();
    let (genome, _) = hill_climber.step((genome, score), rng)?;
    Ok(genome)
}

/// Run the "Counting Ones" hill climber from a copy of `initial_genome`.
///
/// # Errors
///
/// Returns an error if `mutation_probability` isn't in `[0, 1]`, or if
/// `iterations` is positive and the genome is empty.
pub fn run<R: Rng + ?Sized>(
    initial_genome: &Bitstring,
    iterations: usize,
    mutation_probability: f64,
    rng: &mut R,
) -> Result<RunResult<Bitstring, usize>, SearchError> {
    HillClimber::builder()
        .num_iterations(iterations)
        .mutator(BitFlip::new(mutation_probability)?)
        .scorer(CountOnes)
        .build()
        .run(initial_genome.clone(), rng)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{mutator::Identity, scorer::FnScorer};

    #[test]
    fn mutation_never_lowers_fitness() {
        let mut rng = StdRng::seed_from_u64(10);
        for probability in [0.0, 0.01, 0.1, 0.5, 1.0] {
            for _ in 0..50 {
                let genome = Bitstring::random(40, &mut rng).unwrap();
                let before = genome.count_ones();
                let after = mutate(genome, probability, &mut rng).unwrap().count_ones();
                assert!(after >= before, "{after} < {before} with p = {probability}");
            }
        }
    }

    #[test]
    fn zero_probability_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(11);
        for length in [1, 5, 100] {
            let genome = Bitstring::random(length, &mut rng).unwrap();
            assert_eq!(mutate(genome.clone(), 0.0, &mut rng).unwrap(), genome);
        }
    }

    #[test]
    fn ties_are_rejected() {
        // Flipping both bits of `10` gives `01`, which has the same score.
        let mut rng = StdRng::seed_from_u64(12);
        let genome = Bitstring::from(vec![true, false]);
        assert_eq!(mutate(genome.clone(), 1.0, &mut rng).unwrap(), genome);
    }

    #[test]
    fn always_replace_accepts_worse_children() {
        let mut rng = StdRng::seed_from_u64(13);
        let hill_climber = HillClimber::builder()
            .num_iterations(2)
            .always_replace(true)
            .mutator(BitFlip::new(1.0).unwrap())
            .scorer(CountOnes)
            .build();

        let result = hill_climber
            .run(Bitstring::from(vec![true, true, false]), &mut rng)
            .unwrap();

        // 110 -> 001 -> 110
        assert_eq!(result.genome, Bitstring::from(vec![true, true, false]));
        assert_eq!(result.trajectory.best_scores(), &[1, 2]);
    }

    #[test]
    fn zero_iterations_returns_the_initial_genome() {
        let mut rng = StdRng::seed_from_u64(14);
        let initial = Bitstring::random(4, &mut rng).unwrap();
        let result = run(&initial, 0, 0.25, &mut rng).unwrap();
        assert_eq!(result.genome, initial);
        assert_eq!(result.score, initial.count_ones());
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn trajectory_is_seeded_by_the_first_step() {
        // With nothing ever accepted, the first entry must still be the
        // initial genome's score rather than zero.
        let mut rng = StdRng::seed_from_u64(15);
        let initial = Bitstring::from(vec![true, true, false, true]);
        let result = run(&initial, 3, 0.0, &mut rng).unwrap();
        assert_eq!(result.trajectory.best_scores(), &[3, 3, 3]);
    }

    #[test]
    fn trajectories_are_monotone_and_bounded() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..20 {
            let initial = Bitstring::random(30, &mut rng).unwrap();
            let result = run(&initial, 200, 1.0 / 30.0, &mut rng).unwrap();
            assert_eq!(result.trajectory.len(), 200);
            assert!(result.trajectory.is_non_decreasing());
            assert!(result.trajectory.iter().all(|&score| score <= 30));
            assert_eq!(result.trajectory.last(), Some(&result.score));
        }
    }

    #[test]
    fn works_with_other_genomes_and_scorers() {
        let mut rng = StdRng::seed_from_u64(17);
        let hill_climber = HillClimber::builder()
            .num_iterations(5)
            .mutator(Identity)
            .scorer(FnScorer(|value: &i32| value.unsigned_abs()))
            .build();

        let result = hill_climber.run(-7, &mut rng).unwrap();
        assert_eq!(result.genome, -7);
        assert_eq!(result.trajectory.best_scores(), &[7; 5]);
    }

    #[test]
    fn invalid_probability_is_reported() {
        let mut rng = StdRng::seed_from_u64(18);
        let initial = Bitstring::from(vec![false; 3]);
        assert_eq!(
            run(&initial, 10, 2.0, &mut rng),
            Err(SearchError::InvalidProbability { probability: 2.0 })
        );
    }
}
