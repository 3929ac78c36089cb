//! Evaluation vectors: the population's composite keys.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The ordered `(criterion name, score)` pairs produced by applying every
/// registered criterion to one solution.
///
/// Two evaluations are equal iff their sequences are element-wise equal.
/// Scores are canonicalised on construction (`-0.0` becomes `0.0`, every
/// NaN becomes the same NaN) so that equality and hashing agree and an
/// evaluation is always equal to itself.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")
)]
pub struct Evaluation {
    scores: Vec<(String, f64)>,
}

impl Evaluation {
    /// Builds an evaluation from `(name, score)` pairs, preserving order.
    pub fn new<I, N>(scores: I) -> Self
    where
        I: IntoIterator<Item = (N, f64)>,
        N: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(name, score)| (name.into(), canonical(score)))
                .collect(),
        }
    }

    /// Number of criteria in this evaluation.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if no criteria were registered when this was computed.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The `(name, score)` pairs in registration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// The scores in registration order.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().map(|(_, score)| *score)
    }

    /// The score recorded for `name`, if that criterion is part of this vector.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, score)| *score)
    }

    /// Collects the scores into a plain vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.scores().collect()
    }

    /// Pareto dominance under minimisation.
    ///
    /// See [`dominates`](super::dominance::dominates).
    pub fn dominates(&self, other: &Evaluation) -> bool {
        super::dominance::dominates(&self.to_vec(), &other.to_vec())
    }
}

impl From<Vec<(String, f64)>> for Evaluation {
    fn from(scores: Vec<(String, f64)>) -> Self {
        Self::new(scores)
    }
}

impl From<Evaluation> for Vec<(String, f64)> {
    fn from(evaluation: Evaluation) -> Self {
        evaluation.scores
    }
}

fn canonical(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else if score.is_nan() {
        f64::NAN
    } else {
        score
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.scores.len() == other.scores.len()
            && self
                .scores
                .iter()
                .zip(&other.scores)
                .all(|((na, sa), (nb, sb))| na == nb && sa.to_bits() == sb.to_bits())
    }
}

impl Eq for Evaluation {}

impl Hash for Evaluation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scores.len().hash(state);
        for (name, score) in &self.scores {
            name.hash(state);
            score.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, score)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {score}")?;
        }
        f.write_str("}")
    }
}
