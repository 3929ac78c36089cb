//! The population store: evaluation vector → solution.

use super::dominance::evaluation_front;
use super::evaluation::Evaluation;
use indexmap::IndexMap;
use rand::Rng;

/// Mapping from evaluation vectors to the solutions that produced them.
///
/// Entries iterate in insertion order, so a seeded run samples the same
/// solutions every time. Inserting under an existing key replaces the
/// stored solution in place.
#[derive(Debug, Clone)]
pub struct Population<S> {
    entries: IndexMap<Evaluation, S>,
}

impl<S> Default for Population<S> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<S> Population<S> {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct evaluation keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the population holds no solutions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `solution` under `evaluation`.
    ///
    /// Returns `true` if the key was new, `false` if an existing solution
    /// was replaced.
    pub fn insert(&mut self, evaluation: Evaluation, solution: S) -> bool {
        self.entries.insert(evaluation, solution).is_none()
    }

    /// Reduces the population to its Pareto front.
    ///
    /// Survivors keep their relative order.
    pub fn prune(&mut self) {
        let keys: Vec<&Evaluation> = self.evaluations().collect();
        let front = evaluation_front(&keys);
        if front.len() == self.entries.len() {
            return;
        }

        let mut keep = vec![false; self.entries.len()];
        for i in front {
            keep[i] = true;
        }
        let mut flags = keep.into_iter();
        self.entries.retain(|_, _| flags.next().unwrap_or(false));
    }

    /// Iterates over `(evaluation, solution)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Evaluation, &S)> {
        self.entries.iter()
    }

    /// The stored evaluation keys in insertion order.
    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.entries.keys()
    }

    /// Consumes the population, returning its pairs in insertion order.
    pub fn into_entries(self) -> Vec<(Evaluation, S)> {
        self.entries.into_iter().collect()
    }
}

impl<S: Clone> Population<S> {
    /// Draws `k` solutions uniformly at random, with replacement.
    ///
    /// Returns deep copies: mutating them never affects the store or any
    /// other sample. An empty population yields an empty vector.
    pub fn sample<R: Rng>(&self, k: usize, rng: &mut R) -> Vec<S> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        (0..k)
            .map(|_| {
                let i = rng.random_range(0..self.entries.len());
                self.entries[i].clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn eval(x: f64, y: f64) -> Evaluation {
        Evaluation::new([("x", x), ("y", y)])
    }

    fn stored<'a, S>(pop: &'a Population<S>, e: &Evaluation) -> Option<&'a S> {
        pop.entries.get(e)
    }

    #[test]
    fn test_insert_distinct_and_collision() {
        let mut pop = Population::new();
        assert!(pop.insert(eval(1.0, 2.0), "a"));
        assert!(pop.insert(eval(2.0, 1.0), "b"));
        assert_eq!(pop.len(), 2);

        assert!(!pop.insert(eval(1.0, 2.0), "c"));
        assert_eq!(pop.len(), 2);
        assert_eq!(stored(&pop, &eval(1.0, 2.0)), Some(&"c"));
    }

    #[test]
    fn test_sample_empty() {
        let pop: Population<Vec<u8>> = Population::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pop.sample(3, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_len_and_isolation() {
        let mut pop = Population::new();
        pop.insert(eval(1.0, 1.0), vec![1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut picks = pop.sample(4, &mut rng);
        assert_eq!(picks.len(), 4);
        picks[0].push(99);
        picks[1].clear();

        let again = pop.sample(1, &mut rng);
        assert_eq!(again, vec![vec![1, 2, 3]]);
        assert_eq!(stored(&pop, &eval(1.0, 1.0)), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_sample_zero() {
        let mut pop = Population::new();
        pop.insert(eval(1.0, 1.0), 7);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pop.sample(0, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_covers_population() {
        let mut pop = Population::new();
        for i in 0..4 {
            pop.insert(eval(i as f64, -(i as f64)), i);
        }
        let mut rng = StdRng::seed_from_u64(7);
        let picks = pop.sample(400, &mut rng);
        for i in 0..4 {
            assert!(picks.contains(&i), "solution {i} never sampled");
        }
    }

    #[test]
    fn test_prune_abc() {
        let mut pop = Population::new();
        pop.insert(eval(5.0, 1.0), 'A');
        pop.insert(eval(3.0, 3.0), 'B');
        pop.insert(eval(5.0, 5.0), 'C');

        pop.prune();

        let kept: Vec<char> = pop.iter().map(|(_, s)| *s).collect();
        assert_eq!(kept, vec!['A', 'B']);
        assert_eq!(stored(&pop, &eval(5.0, 5.0)), None);
        assert_eq!(stored(&pop, &eval(3.0, 3.0)), Some(&'B'));
    }

    #[test]
    fn test_prune_idempotent() {
        let mut pop = Population::new();
        for (i, (x, y)) in [(1.0, 9.0), (2.0, 2.0), (3.0, 3.0), (9.0, 1.0), (4.0, 8.0)]
            .into_iter()
            .enumerate()
        {
            pop.insert(eval(x, y), i);
        }

        pop.prune();
        let once: Vec<Evaluation> = pop.evaluations().cloned().collect();
        pop.prune();
        let twice: Vec<Evaluation> = pop.evaluations().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(once, vec![eval(1.0, 9.0), eval(2.0, 2.0), eval(9.0, 1.0)]);
    }

    #[test]
    fn test_reinsert_after_prune_overwrites() {
        let mut pop = Population::new();
        pop.insert(eval(3.0, 3.0), 0);
        pop.insert(eval(1.0, 1.0), 1);
        pop.prune();
        assert_eq!(pop.len(), 1);

        // Re-inserting the survivor key overwrites rather than appends.
        assert!(!pop.insert(eval(1.0, 1.0), 2));
        assert_eq!(pop.len(), 1);
        assert_eq!(pop.into_entries(), vec![(eval(1.0, 1.0), 2)]);
    }
}
