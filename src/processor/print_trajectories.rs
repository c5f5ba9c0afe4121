use std::io::{self, Write};

use itertools::Itertools;

use crate::{harness::RunReport, processor::Processor, trajectory::Trajectory};

/// Collect every run's trajectory and print them as comma-separated values
/// when finalized, one row per sampled iteration and one column per run.
///
/// Only every `stride`-th iteration is printed (plus the last one), which
/// keeps the output manageable for long runs. The output is meant to be
/// piped into a plotting tool.
#[derive(Debug)]
pub struct PrintTrajectories {
    stride: usize,
    trajectories: Vec<Trajectory<usize>>,
}

impl PrintTrajectories {
    /// A `stride` of zero is treated as one.
    #[must_use]
    pub fn every(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            trajectories: Vec::new(),
        }
    }

    /// Write the collected trajectories as CSV.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `writer`.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "iteration,{}",
            (0..self.trajectories.len())
                .map(|run_number| format!("run_{run_number}"))
                .join(",")
        )?;

        let num_iterations = self
            .trajectories
            .iter()
            .map(Trajectory::len)
            .max()
            .unwrap_or_default();
        let last = num_iterations.checked_sub(1);
        let sampled = (0..num_iterations)
            .step_by(self.stride)
            .chain(last.filter(|last| last % self.stride != 0))
            .dedup();

        for iteration in sampled {
            writeln!(
                writer,
                "{iteration},{}",
                self.trajectories
                    .iter()
                    .map(|trajectory| trajectory
                        .best_scores()
                        .get(iteration)
                        .map_or_else(String::new, ToString::to_string))
                    .join(",")
            )?;
        }
        Ok(())
    }
}

impl Processor<RunReport> for PrintTrajectories {
    fn process(&mut self, (_, result): &RunReport) {
        self.trajectories.push(result.trajectory.clone());
    }

    fn finalize_and_print(&self) {
        if let Err(error) = self.write_csv(io::stdout().lock()) {
            log::error!("Failed to print trajectories: {error}");
        }
    }
}
