use crate::{harness::RunReport, processor::Processor};

/// Print a line for each completed run, plus the best final score when
/// finalized.
#[derive(Debug, Default)]
pub struct PrintMonitor {
    best_score_so_far: Option<usize>,
    num_runs: usize,
}

impl PrintMonitor {
    #[must_use]
    pub const fn best_score_so_far(&self) -> Option<usize> {
        self.best_score_so_far
    }
}

impl Processor<RunReport> for PrintMonitor {
    fn process(&mut self, (run_number, result): &RunReport) {
        self.num_runs += 1;
        if self
            .best_score_so_far
            .is_none_or(|best_score_so_far| result.score > best_score_so_far)
        {
            self.best_score_so_far = Some(result.score);
        }

        match result.trajectory.first_reaching(&result.score) {
            Some(iteration) => println!(
                "Run {run_number:4} finished with score {:6}, first reached at iteration {iteration:6}",
                result.score
            ),
            None => println!(
                "Run {run_number:4} finished with score {:6} without iterating",
                result.score
            ),
        }
    }

    fn finalize_and_print(&self) {
        match self.best_score_so_far {
            Some(best_score) => println!(
                "Best final score over {} runs was {best_score}",
                self.num_runs
            ),
            None => println!("No runs were completed"),
        }
    }
}
