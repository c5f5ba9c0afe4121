pub mod args;

use std::thread;

use clap::Parser;
use counting_ones::{
    channel_consumer::ChannelConsumer,
    error::{checked_budget, Budget},
    harness::{Harness, RunReport},
    processor::{
        print_monitor::PrintMonitor, print_trajectories::PrintTrajectories, Processor,
    },
};
use miette::miette;
use rand::{rngs::StdRng, SeedableRng};

use crate::args::CliArgs;

fn main() -> miette::Result<()> {
    env_logger::init();

    let CliArgs {
        bit_length,
        mutation_probability,
        iterations,
        runs,
        always_replace,
        seed,
        trajectory_stride,
    } = CliArgs::parse();

    let num_iterations = checked_budget(Budget::Iterations, iterations)?;
    let num_runs = checked_budget(Budget::Runs, runs)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let harness = Harness::builder()
        .num_runs(num_runs)
        .bit_length(bit_length)
        .num_iterations(num_iterations)
        .maybe_mutation_probability(mutation_probability)
        .always_replace(always_replace)
        .build();

    // The monitors run on their own thread so printing doesn't hold up the
    // search.
    let channel_capacity = 100;
    let (mut sender, receiver) = flume::bounded::<RunReport>(channel_capacity);

    let mut all_monitors = (
        PrintMonitor::default(),
        trajectory_stride.map(PrintTrajectories::every),
    );

    let monitor_handle = thread::spawn(move || {
        all_monitors.consume_all(receiver);
        all_monitors.finalize_and_print();
    });

    let summary = harness.execute_with(&mut rng, &mut sender)?;

    drop(sender);

    monitor_handle
        .join()
        .map_err(|_| miette!("The monitor thread panicked"))?;

    println!("{summary}");
    println!(
        "Entropy of the final genomes: {:.3} bits",
        summary.final_entropy()
    );

    Ok(())
}
