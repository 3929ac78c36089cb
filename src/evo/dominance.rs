//! Pareto dominance and front extraction.
//!
//! All criteria are **minimised**: lower values are better.
//!
//! # Algorithms
//!
//! - [`dominates`]: pairwise Pareto dominance
//! - [`pareto_front`]: indices of the non-dominated vectors of a set
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use super::evaluation::Evaluation;

/// Returns `true` if `p` Pareto-dominates `q`.
///
/// `p` dominates `q` iff `p[i] <= q[i]` for every position and
/// `p[j] < q[j]` for at least one. The relation is irreflexive and
/// transitive. A NaN at any position makes the pair incomparable.
///
/// # Example
///
/// ```
/// use u_evo::evo::dominance::dominates;
///
/// assert!(dominates(&[5.0, 1.0], &[5.0, 5.0]));
/// assert!(!dominates(&[5.0, 1.0], &[3.0, 3.0]));
/// assert!(!dominates(&[3.0, 3.0], &[3.0, 3.0]));
/// ```
pub fn dominates(p: &[f64], q: &[f64]) -> bool {
    dominance_cmp(p, q) == Dominance::Left
}

/// Indices of the non-dominated vectors in `objectives`.
///
/// A vector survives iff no vector of the *whole* input dominates it. This
/// is the same set as folding over the input and, for each vector `p`,
/// discarding every survivor that `p` dominates: a discarded vector still
/// counts as a dominator, so membership depends only on the pairwise
/// relation, never on the fold order. Survivors are mutually
/// non-dominated, and equal vectors survive together.
///
/// Indices are returned in ascending order.
///
/// # Complexity
///
/// O(m * n²) where m = number of criteria, n = number of vectors
///
/// # Example
///
/// ```
/// use u_evo::evo::dominance::pareto_front;
///
/// let objectives = vec![
///     vec![5.0, 1.0], // A
///     vec![3.0, 3.0], // B
///     vec![5.0, 5.0], // C: dominated by A and B
/// ];
///
/// assert_eq!(pareto_front(&objectives), vec![0, 1]);
/// ```
pub fn pareto_front<V: AsRef<[f64]>>(objectives: &[V]) -> Vec<usize> {
    let n = objectives.len();
    let mut dominated = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref()) {
                Dominance::Left => dominated[j] = true,
                Dominance::Right => dominated[i] = true,
                Dominance::Neither => {}
            }
        }
    }

    (0..n).filter(|&i| !dominated[i]).collect()
}

/// [`pareto_front`] over evaluation vectors.
pub fn evaluation_front(evaluations: &[&Evaluation]) -> Vec<usize> {
    let objectives: Vec<Vec<f64>> = evaluations.iter().map(|e| e.to_vec()).collect();
    pareto_front(&objectives)
}

/// Dominance comparison result.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compare two vectors for Pareto dominance (minimisation).
fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "evaluation vectors must be aligned");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (va, vb) in a.iter().zip(b.iter()) {
        match va.partial_cmp(vb) {
            Some(std::cmp::Ordering::Less) => a_better_in_some = true,
            Some(std::cmp::Ordering::Greater) => b_better_in_some = true,
            Some(std::cmp::Ordering::Equal) => {}
            None => return Dominance::Neither,
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

// ============================================================================
// Tests
// ============================================================================
