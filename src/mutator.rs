use std::convert::Infallible;

use rand::Rng;

use crate::{bitstring::Bitstring, error::SearchError};

/// Propose a new genome from an existing one.
///
/// Mutators only *propose* changes; deciding whether to keep the proposal is
/// the job of the [`HillClimber`](crate::hill_climber::HillClimber).
pub trait Mutator<G> {
    type Error;

    /// # Errors
    ///
    /// Implementations return an error if they can't mutate `genome`.
    fn mutate<R: Rng + ?Sized>(&self, genome: G, rng: &mut R) -> Result<G, Self::Error>;
}

/// Flip each bit independently with a fixed probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlip {
    mutation_probability: f64,
}

impl BitFlip {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidProbability`] unless
    /// `mutation_probability` is in `[0, 1]`.
    pub fn new(mutation_probability: f64) -> Result<Self, SearchError> {
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(SearchError::InvalidProbability {
                probability: mutation_probability,
            });
        }
        Ok(Self {
            mutation_probability,
        })
    }

    /// The usual choice of flipping each bit with probability `1 / length`,
    /// so one bit is flipped on average.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidLength`] if `length` is zero.
    #[expect(
        clippy::cast_precision_loss,
        clippy::as_conversions,
        reason = "Genome lengths are nowhere near 2^52"
    )]
    pub fn one_over_length(length: usize) -> Result<Self, SearchError> {
        if length == 0 {
            return Err(SearchError::InvalidLength { length });
        }
        Self::new(1.0 / length as f64)
    }

    #[must_use]
    pub const fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

impl Mutator<Bitstring> for BitFlip {
    type Error = SearchError;

    fn mutate<R: Rng + ?Sized>(
        &self,
        mut genome: Bitstring,
        rng: &mut R,
    ) -> Result<Bitstring, Self::Error> {
        if genome.is_empty() {
            return Err(SearchError::InvalidLength { length: 0 });
        }
        // A uniform draw from [0, 1) is never below 0, so a probability of 0
        // leaves every bit alone.
        for index in 0..genome.len() {
            if rng.random::<f64>() < self.mutation_probability {
                genome.flip(index);
            }
        }
        Ok(genome)
    }
}

/// Leaves the genome unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<G> Mutator<G> for Identity {
    type Error = Infallible;

    fn mutate<R: Rng + ?Sized>(&self, genome: G, _: &mut R) -> Result<G, Self::Error> {
        Ok(genome)
    }
}
