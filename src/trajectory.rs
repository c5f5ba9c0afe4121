use itertools::Itertools;

/// The best score seen so far, recorded once per iteration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trajectory<Sc> {
    best_scores: Vec<Sc>,
}

impl<Sc> Trajectory<Sc> {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            best_scores: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, best_score: Sc) {
        self.best_scores.push(best_score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best_scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_scores.is_empty()
    }

    /// The best score at the end of the run, or `None` if the run had no
    /// iterations.
    #[must_use]
    pub fn last(&self) -> Option<&Sc> {
        self.best_scores.last()
    }

    #[must_use]
    pub fn best_scores(&self) -> &[Sc] {
        &self.best_scores
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sc> {
        self.best_scores.iter()
    }

    /// The first iteration whose best score is at least `target`.
    ///
    /// ```
    /// # use counting_ones::trajectory::Trajectory;
    /// let trajectory = Trajectory::from(vec![1, 3, 3, 4]);
    /// assert_eq!(trajectory.first_reaching(&3), Some(1));
    /// assert_eq!(trajectory.first_reaching(&5), None);
    /// ```
    pub fn first_reaching(&self, target: &Sc) -> Option<usize>
    where
        Sc: PartialOrd,
    {
        self.best_scores.iter().position(|score| score >= target)
    }

    /// Best-so-far scores can never go down.
    #[must_use]
    pub fn is_non_decreasing(&self) -> bool
    where
        Sc: PartialOrd,
    {
        self.best_scores
            .iter()
            .tuple_windows()
            .all(|(previous, next)| previous <= next)
    }
}

impl<Sc> From<Vec<Sc>> for Trajectory<Sc> {
    fn from(best_scores: Vec<Sc>) -> Self {
        Self { best_scores }
    }
}

impl<'a, Sc> IntoIterator for &'a Trajectory<Sc> {
    type Item = &'a Sc;
    type IntoIter = std::slice::Iter<'a, Sc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
