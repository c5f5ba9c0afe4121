use crate::bitstring::Bitstring;

/// Compute the entropy (in bits) of the given collection of bitstrings.
///
/// To compute the entropy of the set of bitstrings:
///    - Compute the mean of each bit position
///    - Then sum up -(mean * log_2(mean) + (1-mean) * log_2(1-mean)) across each position.
///
/// The bitstrings are assumed to all have the length of the first one. An
/// empty collection has entropy zero.
#[expect(
    clippy::cast_precision_loss,
    clippy::as_conversions,
    reason = "I'm happy just smashing the types for now."
)]
#[expect(
    clippy::suboptimal_flops,
    reason = "I'm not sure using `mul_add` buys us anything and makes it more confusing"
)]
#[must_use]
pub fn entropy(bitstrings: &[&Bitstring]) -> f64 {
    let Some(first) = bitstrings.first() else {
        return 0.0;
    };
    let num_bitstrings = bitstrings.len() as f64;

    let means = (0..first.len()).map(|index| {
        bitstrings
            .iter()
            .filter(|bitstring| bitstring.bits().get(index) == Some(&true))
            .count() as f64
            / num_bitstrings
    });
    -means
        .map(|mean| {
            mean * (mean + f64::MIN_POSITIVE).log2()
                + (1.0 - mean) * (1.0 - mean + f64::MIN_POSITIVE).log2()
        })
        .sum::<f64>()
}
