use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Hill climbing on the \"Counting Ones\" problem", long_about = None)]
pub struct CliArgs {
    /// The number of bits in each genome
    #[arg(short, long, default_value_t = 100)]
    pub bit_length: usize,

    /// The probability of flipping each bit; defaults to 1 / bit-length
    #[arg(short, long)]
    pub mutation_probability: Option<f64>,

    /// The number of mutate-and-accept steps in each run
    #[arg(short, long, default_value_t = 1_500, allow_negative_numbers = true)]
    pub iterations: i64,

    /// The number of independent runs
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub runs: i64,

    /// Accept every mutated child, even when it's no better than its parent
    #[arg(long)]
    pub always_replace: bool,

    /// Seed for the random number generator, for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print every run's trajectory as CSV, sampling every N iterations
    #[arg(long, value_name = "N")]
    pub trajectory_stride: Option<usize>,
}
