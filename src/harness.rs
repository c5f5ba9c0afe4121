use std::fmt::Display;

use bon::Builder;
use log::{debug, info};
use rand::{distr::Distribution, Rng};

use crate::{
    bitstring::{Bitstring, BitstringGenerator},
    error::SearchError,
    hill_climber::{HillClimber, RunResult},
    mutator::BitFlip,
    processor::Processor,
    scorer::CountOnes,
    statistics::entropy,
    trajectory::Trajectory,
};

pub type BitstringRun = RunResult<Bitstring, usize>;

/// A completed run together with its (zero-based) run number.
pub type RunReport = (usize, BitstringRun);

/// Repeats independent "Counting Ones" hill climbing runs.
#[derive(Debug, Clone, Builder)]
pub struct Harness {
    #[builder(default = 10)]
    num_runs: usize,

    #[builder(default = 100)]
    bit_length: usize,

    #[builder(default = 1_500)]
    num_iterations: usize,

    /// Defaults to `1 / bit_length`.
    mutation_probability: Option<f64>,

    /// See [`HillClimber`] for what this does.
    #[builder(default = false)]
    always_replace: bool,
}

impl Harness {
    /// Execute all the runs, drawing every random value from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bit length is zero or the mutation probability
    /// isn't in `[0, 1]`. Parameters are checked before the first run starts.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<HarnessSummary, SearchError> {
        self.execute_with(rng, &mut ())
    }

    /// Like [`Harness::execute`], but hands each completed run to `processor`
    /// (in run order) as soon as it finishes.
    ///
    /// # Errors
    ///
    /// See [`Harness::execute`].
    pub fn execute_with<R, P>(
        &self,
        rng: &mut R,
        processor: &mut P,
    ) -> Result<HarnessSummary, SearchError>
    where
        R: Rng + ?Sized,
        P: Processor<RunReport>,
    {
        let genome_maker = BitstringGenerator::new(self.bit_length)?;
        let mutator = match self.mutation_probability {
            Some(mutation_probability) => BitFlip::new(mutation_probability)?,
            None => BitFlip::one_over_length(self.bit_length)?,
        };

        let hill_climber = HillClimber::builder()
            .num_iterations(self.num_iterations)
            .always_replace(self.always_replace)
            .mutator(mutator)
            .scorer(CountOnes)
            .build();

        let mut runs = Vec::with_capacity(self.num_runs);
        for run_number in 0..self.num_runs {
            debug!(
                "Starting run {run_number} with mutation probability {}",
                mutator.mutation_probability()
            );
            let initial_genome = genome_maker.sample(rng);
            let result = hill_climber.run(initial_genome, rng)?;
            info!(
                "Run {run_number} finished with score {} / {}",
                result.score, self.bit_length
            );

            let report = (run_number, result);
            processor.process(&report);
            runs.push(report.1);
        }

        Ok(HarnessSummary::new(self.bit_length, runs))
    }
}

/// What happened across all the runs of a [`Harness`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessSummary {
    max_score: usize,
    reached_max: usize,
    runs: Vec<BitstringRun>,
}

impl HarnessSummary {
    /// Build a summary where `max_score` is the best achievable score (the
    /// bit length) and `runs` are in the order they were executed.
    #[must_use]
    pub fn new(max_score: usize, runs: Vec<BitstringRun>) -> Self {
        let reached_max = runs
            .iter()
            .filter(|run| run.trajectory.last() == Some(&max_score))
            .count();
        Self {
            max_score,
            reached_max,
            runs,
        }
    }

    /// The number of runs whose final best score was the maximum possible.
    #[must_use]
    pub const fn reached_max(&self) -> usize {
        self.reached_max
    }

    #[must_use]
    pub const fn max_score(&self) -> usize {
        self.max_score
    }

    #[must_use]
    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn runs(&self) -> &[BitstringRun] {
        &self.runs
    }

    pub fn trajectories(&self) -> impl Iterator<Item = &Trajectory<usize>> {
        self.runs.iter().map(|run| &run.trajectory)
    }

    pub fn final_genomes(&self) -> impl Iterator<Item = &Bitstring> {
        self.runs.iter().map(|run| &run.genome)
    }

    /// The entropy of the final genomes, a rough measure of how different
    /// the runs ended up. Zero if there were no runs.
    #[must_use]
    pub fn final_entropy(&self) -> f64 {
        entropy(&self.final_genomes().collect::<Vec<_>>())
    }
}

impl Display for HarnessSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} runs reached score {}",
            self.reached_max,
            self.num_runs(),
            self.max_score
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn run_with(best_scores: Vec<usize>) -> BitstringRun {
        let score = best_scores.last().copied().unwrap_or_default();
        RunResult {
            genome: Bitstring::from(vec![true; score]),
            score,
            trajectory: Trajectory::from(best_scores),
        }
    }

    #[test]
    fn counts_runs_ending_at_the_maximum() {
        let summary = HarnessSummary::new(
            3,
            vec![run_with(vec![1, 3]), run_with(vec![2, 2]), run_with(vec![3, 3])],
        );
        assert_eq!(summary.reached_max(), 2);
        assert_eq!(summary.to_string(), "2 / 3 runs reached score 3");
    }

    #[test]
    fn empty_trajectories_never_count() {
        let summary = HarnessSummary::new(2, vec![run_with(vec![])]);
        assert_eq!(summary.reached_max(), 0);
    }

    #[test]
    fn zero_runs() {
        let mut rng = StdRng::seed_from_u64(20);
        let summary = Harness::builder()
            .num_runs(0)
            .build()
            .execute(&mut rng)
            .unwrap();
        assert_eq!(summary.num_runs(), 0);
        assert_eq!(summary.reached_max(), 0);
        assert_eq!(summary.final_entropy(), 0.0);
    }

    #[test]
    fn invalid_parameters_abort_before_any_run() {
        struct Panics;
        impl Processor<RunReport> for Panics {
            fn process(&mut self, _: &RunReport) {
                panic!("no run should have completed");
            }
        }

        let mut rng = StdRng::seed_from_u64(21);
        let harness = Harness::builder()
            .bit_length(8)
            .mutation_probability(-0.5)
            .build();
        assert_eq!(
            harness.execute_with(&mut rng, &mut Panics),
            Err(SearchError::InvalidProbability { probability: -0.5 })
        );

        let harness = Harness::builder().bit_length(0).build();
        assert_eq!(
            harness.execute(&mut rng),
            Err(SearchError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn reports_every_run_in_order() {
        #[derive(Default)]
        struct RunNumbers(Vec<usize>);
        impl Processor<RunReport> for RunNumbers {
            fn process(&mut self, (run_number, _): &RunReport) {
                self.0.push(*run_number);
            }
        }

        let mut rng = StdRng::seed_from_u64(22);
        let mut seen = RunNumbers::default();
        let summary = Harness::builder()
            .num_runs(4)
            .bit_length(10)
            .num_iterations(50)
            .build()
            .execute_with(&mut rng, &mut seen)
            .unwrap();
        assert_eq!(seen.0, vec![0, 1, 2, 3]);
        assert_eq!(summary.trajectories().count(), 4);
        assert!(summary
            .trajectories()
            .all(|trajectory| trajectory.len() == 50 && trajectory.is_non_decreasing()));
    }
}
