use crate::bitstring::Bitstring;

/// Something that can assign a score to a genome. Larger scores are better.
pub trait Scorer<G> {
    type Score;

    fn score(&self, genome: &G) -> Self::Score;
}

impl<G, S> Scorer<G> for &S
where
    S: Scorer<G> + ?Sized,
{
    type Score = S::Score;

    fn score(&self, genome: &G) -> Self::Score {
        (**self).score(genome)
    }
}

/// Use a closure as a [`Scorer`].
///
/// ```
/// # use counting_ones::scorer::{FnScorer, Scorer};
/// let scorer = FnScorer(|value: &i32| -value.abs());
/// assert_eq!(scorer.score(&-4), -4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnScorer<F>(pub F);

impl<G, S, F> Scorer<G> for FnScorer<F>
where
    F: Fn(&G) -> S,
{
    type Score = S;

    fn score(&self, genome: &G) -> S {
        (self.0)(genome)
    }
}

/// Scores a [`Bitstring`] by the number of ones it contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOnes;

impl Scorer<Bitstring> for CountOnes {
    type Score = usize;

    fn score(&self, genome: &Bitstring) -> usize {
        genome.count_ones()
    }
}
