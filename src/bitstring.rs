use std::fmt::Display;

use rand::{distr::Distribution, Rng};

use crate::error::SearchError;

/// A fixed-length string of bits, the genome for the "Counting Ones" problem.
///
/// The length is set when the bitstring is created and none of the operations
/// in this crate change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Generate a bitstring of the given length where each bit is
    /// independently `true` with probability 1/2.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidLength`] if `length` is zero.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, SearchError> {
        Ok(BitstringGenerator::new(length)?.sample(rng))
    }

    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The number of `true` bits, i.e., the "Counting Ones" fitness.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        count_ones(&self.bits)
    }

    /// Flip the bit at `index`. Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] ^= true;
    }
}

impl From<Vec<bool>> for Bitstring {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for Bitstring {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Display for Bitstring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Count the `true` values in `bits`.
///
/// ```
/// # use counting_ones::bitstring::count_ones;
/// assert_eq!(count_ones(&[true, false, true, true]), 3);
/// assert_eq!(count_ones(&[]), 0);
/// ```
#[must_use]
pub fn count_ones(bits: &[bool]) -> usize {
    bits.iter().filter(|&&bit| bit).count()
}

/// A `Distribution` of uniformly random bitstrings of a fixed, positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitstringGenerator {
    length: usize,
}

impl BitstringGenerator {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, SearchError> {
        if length == 0 {
            return Err(SearchError::InvalidLength { length });
        }
        Ok(Self { length })
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Distribution<Bitstring> for BitstringGenerator {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bitstring {
        (0..self.length).map(|_| rng.random::<bool>()).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Bitstring::random(0, &mut rng),
            Err(SearchError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn random_bitstrings_have_the_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 2, 17, 100] {
            let bitstring = Bitstring::random(length, &mut rng).unwrap();
            assert_eq!(bitstring.len(), length);
            assert!(bitstring.count_ones() <= length);
        }
    }

    #[test]
    fn random_bits_are_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(2);
        let bitstring = Bitstring::random(10_000, &mut rng).unwrap();
        let ones = bitstring.count_ones();
        assert!((4_500..=5_500).contains(&ones), "{ones} ones out of 10,000");
    }

    #[test]
    fn empty_bitstring_has_zero_fitness() {
        assert_eq!(Bitstring::default().count_ones(), 0);
    }

    #[test]
    fn flip_toggles_a_single_bit() {
        let mut bitstring = Bitstring::from(vec![false, true, false]);
        bitstring.flip(0);
        bitstring.flip(1);
        assert_eq!(bitstring.bits(), &[true, false, false]);
    }

    #[test]
    fn display_uses_zeros_and_ones() {
        let bitstring: Bitstring = [true, false, false, true].into_iter().collect();
        assert_eq!(bitstring.to_string(), "1001");
    }
}
