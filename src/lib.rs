//! Helpers for exploring simple hill climbing on the "Counting Ones" problem.
//!
//! The pieces build on each other:
//!
//! - [`bitstring`] and [`scorer`] define the genome and its fitness,
//! - [`mutator`] proposes bit-flip mutations,
//! - [`hill_climber`] applies the mutate-and-accept step for a fixed
//!   number of iterations, recording a [`Trajectory`](trajectory::Trajectory),
//! - [`harness`] repeats independent runs and summarizes how many reached
//!   the maximum score.
//!
//! Completed runs can be observed with a [`Processor`](processor::Processor),
//! either inline or over a channel (see [`channel_consumer`]).
//!
//! ```
//! use counting_ones::harness::Harness;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let summary = Harness::builder()
//!     .num_runs(3)
//!     .bit_length(16)
//!     .num_iterations(500)
//!     .build()
//!     .execute(&mut rng)?;
//!
//! assert_eq!(summary.num_runs(), 3);
//! assert!(summary.reached_max() <= 3);
//! # Ok::<(), counting_ones::error::SearchError>(())
//! ```

pub mod bitstring;
pub mod channel_consumer;
pub mod error;
pub mod harness;
pub mod hill_climber;
pub mod mutator;
pub mod processor;
pub mod scorer;
pub mod statistics;
pub mod trajectory;
