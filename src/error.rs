use std::fmt::Display;

use miette::Diagnostic;

/// Validation errors for the parameters of a search.
///
/// All of these are configuration mistakes, so they're reported as soon as
/// the offending value reaches an operation and nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum SearchError {
    #[error("genome length must be positive, got {length}")]
    #[diagnostic(code(counting_ones::invalid_length))]
    InvalidLength { length: usize },

    #[error("mutation probability must be in [0, 1], got {probability}")]
    #[diagnostic(
        code(counting_ones::invalid_probability),
        help("1 / genome length is the usual choice")
    )]
    InvalidProbability { probability: f64 },

    #[error("the number of {budget} can't be negative, got {value}")]
    #[diagnostic(code(counting_ones::invalid_budget))]
    InvalidBudget { budget: Budget, value: i64 },
}

/// Which budget a signed count was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Iterations,
    Runs,
}

impl Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iterations => f.write_str("iterations"),
            Self::Runs => f.write_str("runs"),
        }
    }
}

/// Convert a signed count (e.g., from the command line) into a budget.
///
/// # Errors
///
/// Returns [`SearchError::InvalidBudget`] if `value` is negative.
///
/// ```
/// # use counting_ones::error::{checked_budget, Budget, SearchError};
/// assert_eq!(checked_budget(Budget::Runs, 10), Ok(10));
/// assert_eq!(
///     checked_budget(Budget::Iterations, -1),
///     Err(SearchError::InvalidBudget { budget: Budget::Iterations, value: -1 })
/// );
/// ```
pub fn checked_budget(budget: Budget, value: i64) -> Result<usize, SearchError> {
    usize::try_from(value).map_err(|_| SearchError::InvalidBudget { budget, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_valid_budget() {
        assert_eq!(checked_budget(Budget::Iterations, 0), Ok(0));
    }

    #[test]
    fn messages_name_the_budget() {
        let error = checked_budget(Budget::Runs, -3).unwrap_err();
        assert_eq!(error.to_string(), "the number of runs can't be negative, got -3");
    }
}
