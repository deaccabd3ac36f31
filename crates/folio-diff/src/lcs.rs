//! Longest-common-subsequence alignment shared by the block and word differs.
//!
//! The match predicate is arbitrary (fuzzy similarity for blocks, exact
//! equality for words), so it is evaluated once per `(old, new)` pair and
//! cached alongside the LCS table.

use std::collections::HashSet;

/// One step of an edit script over two sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// `old[i]` and `new[j]` were aligned with each other.
    Keep(usize, usize),
    /// `old[i]` has no counterpart.
    Delete(usize),
    /// `new[j]` has no counterpart.
    Insert(usize),
}

/// An LCS alignment between `old` (length `m`) and `new` (length `n`).
struct Alignment {
    n: usize,
    matches_at: Vec<bool>,
    pairs: HashSet<(usize, usize)>,
}

impl Alignment {
    fn compute<T, F>(old: &[T], new: &[T], matches: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let (m, n) = (old.len(), new.len());
        let width = n + 1;

        let mut matches_at = Vec::with_capacity(m * n);
        for a in old {
            for b in new {
                matches_at.push(matches(a, b));
            }
        }

        let mut dp = vec![0usize; (m + 1) * width];
        for i in 1..=m {
            for j in 1..=n {
                dp[i * width + j] = if matches_at[(i - 1) * n + (j - 1)] {
                    dp[(i - 1) * width + (j - 1)] + 1
                } else {
                    dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
                };
            }
        }

        // Backtrack; on ties consume the old sequence first.
        let mut pairs = HashSet::with_capacity(dp[m * width + n]);
        let (mut i, mut j) = (m, n);
        while i > 0 && j > 0 {
            if matches_at[(i - 1) * n + (j - 1)] {
                pairs.insert((i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if dp[(i - 1) * width + j] >= dp[i * width + (j - 1)] {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        Self {
            n,
            matches_at,
            pairs,
        }
    }

    fn matches(&self, i: usize, j: usize) -> bool {
        self.matches_at[i * self.n + j]
    }

    /// Whether `old[i]` matches any element of `new[from..]`.
    fn matches_later(&self, i: usize, from: usize) -> bool {
        (from..self.n).any(|j| self.matches(i, j))
    }
}

/// Compute the edit script turning `old` into `new`.
///
/// Walks both sequences with two cursors: aligned pairs are kept, an old
/// element with no match in the rest of `new` is deleted, anything else is an
/// insertion. The script length is at most `old.len() + new.len()`.
pub(crate) fn edit_script<T, F>(old: &[T], new: &[T], matches: F) -> Vec<Step>
where
    F: Fn(&T, &T) -> bool,
{
    let alignment = Alignment::compute(old, new, matches);
    let (m, n) = (old.len(), new.len());

    let mut steps = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (0, 0);
    while i < m || j < n {
        if i < m && j < n && alignment.pairs.contains(&(i, j)) {
            steps.push(Step::Keep(i, j));
            i += 1;
            j += 1;
        } else if i < m && (j >= n || !alignment.matches_later(i, j)) {
            steps.push(Step::Delete(i));
            i += 1;
        } else {
            steps.push(Step::Insert(j));
            j += 1;
        }
    }
    steps
}
