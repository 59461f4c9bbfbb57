//! The directed like-score matrix.
//!
//! `score[i][j]` is how much agent `i` likes agent `j`: a random baseline
//! (agent `i`'s "personality" toward `j`) plus the sum of `i`'s preference
//! entries for `j`'s gender, age, race, and each of `j`'s hobbies.
//!
//! The matrix is computed once, before day 0, and never changes: liking does
//! not evolve as friendships form.

use sn_core::{AgentId, ScoreRange, SimRng};
use tracing::{debug, warn};

use crate::{AgentError, AgentResult, AgentStore, Characteristics, Preferences};

// ── PreferenceTerms ───────────────────────────────────────────────────────────

/// The deterministic part of a directed like score, split by attribute.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PreferenceTerms {
    pub gender: f64,
    pub age:    f64,
    pub race:   f64,
    pub hobby:  f64,
}

impl PreferenceTerms {
    #[inline]
    pub fn total(&self) -> f64 {
        self.gender + self.age + self.race + self.hobby
    }
}

/// How much an agent with preferences `liker` is drawn to the attributes of
/// `target`, excluding the random baseline.
pub fn preference_terms(liker: &Preferences, target: &Characteristics) -> PreferenceTerms {
    PreferenceTerms {
        gender: liker.gender[target.gender() as usize],
        age:    liker.age[target.age_slot()],
        race:   liker.race[target.race() as usize],
        hobby:  target.hobbies().iter().map(|&h| liker.hobby[h as usize]).sum(),
    }
}

// ── LikeScoreMatrix ───────────────────────────────────────────────────────────

/// Dense row-major N×N matrix of directed like scores.  The diagonal is
/// stored as `0.0` and never read.
#[derive(Clone, Debug, PartialEq)]
pub struct LikeScoreMatrix {
    n:      usize,
    scores: Vec<f64>,
}

impl LikeScoreMatrix {
    /// Compute every ordered pair `(i, j)`, `i != j`, row by row.
    ///
    /// Exactly one baseline draw is made per off-diagonal cell, in row-major
    /// order, unless `baseline` is degenerate (then no draws are made).
    pub fn compute(agents: &AgentStore, baseline: ScoreRange, rng: &mut SimRng) -> Self {
        if baseline.is_degenerate() {
            warn!(value = baseline.lo, "degenerate baseline range: every like score gets the same baseline");
        }

        let n = agents.count;
        let mut scores = vec![0.0; n * n];
        for i in 0..n {
            let prefs = &agents.preferences[i];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let base = rng.uniform(baseline.lo, baseline.hi);
                let terms = preference_terms(prefs, &agents.characteristics[j]);
                scores[i * n + j] = base + terms.total();
            }
        }

        debug!(agents = n, "computed like-score matrix");
        Self { n, scores }
    }

    /// Build from explicit rows.  Every row must have `rows.len()` entries;
    /// diagonal entries are overwritten with `0.0`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AgentResult<Self> {
        let n = rows.len();
        let mut scores = Vec::with_capacity(n * n);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AgentError::NotSquare {
                    expected: n,
                    row:      row_idx,
                    got:      row.len(),
                });
            }
            scores.extend(row);
            scores[row_idx * n + row_idx] = 0.0;
        }
        Ok(Self { n, scores })
    }

    /// Every off-diagonal cell set to `value`.
    pub fn filled(n: usize, value: f64) -> Self {
        let mut scores = vec![value; n * n];
        for i in 0..n {
            scores[i * n + i] = 0.0;
        }
        Self { n, scores }
    }

    /// Number of agents covered (matrix side length).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// How much `from` likes `to`.
    #[inline]
    pub fn get(&self, from: AgentId, to: AgentId) -> f64 {
        self.scores[from.index() * self.n + to.index()]
    }

    /// All scores held by `from`, indexed by target.
    #[inline]
    pub fn row(&self, from: AgentId) -> &[f64] {
        let start = from.index() * self.n;
        &self.scores[start..start + self.n]
    }

    /// Error unless the matrix covers exactly `agents.count` agents.
    pub fn check_covers(&self, agents: &AgentStore) -> AgentResult<()> {
        if self.n != agents.count {
            return Err(AgentError::SizeMismatch { matrix: self.n, agents: agents.count });
        }
        Ok(())
    }
}
