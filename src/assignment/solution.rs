//! The TA × section assignment grid.

use rand::Rng;
use std::fmt;

/// Which TA covers which section: `grid[ta][section]`.
///
/// The section count is stored separately so a grid with no TAs still
/// knows how many sections it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    grid: Vec<Vec<bool>>,
    n_sections: usize,
}

impl Assignment {
    /// An assignment with nobody assigned anywhere.
    pub fn empty(n_tas: usize, n_sections: usize) -> Self {
        Self {
            grid: vec![vec![false; n_sections]; n_tas],
            n_sections,
        }
    }

    /// A random assignment where each cell is set with probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn random<R: Rng>(n_tas: usize, n_sections: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        Self {
            grid: (0..n_tas)
                .map(|_| (0..n_sections).map(|_| rng.random_bool(density)).collect())
                .collect(),
            n_sections,
        }
    }

    /// Builds an assignment from 0/1 rows.
    ///
    /// # Panics
    /// Panics if the rows have different lengths.
    pub fn from_rows<I, T>(rows: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let grid: Vec<Vec<bool>> = rows
            .into_iter()
            .map(|r| r.as_ref().iter().map(|&c| c != 0).collect())
            .collect();
        let n_sections = grid.first().map_or(0, Vec::len);
        assert!(
            grid.iter().all(|r| r.len() == n_sections),
            "rows must have equal length"
        );
        Self { grid, n_sections }
    }

    pub fn n_tas(&self) -> usize {
        self.grid.len()
    }

    pub fn n_sections(&self) -> usize {
        self.n_sections
    }

    pub fn is_assigned(&self, ta: usize, section: usize) -> bool {
        self.grid[ta][section]
    }

    pub fn set(&mut self, ta: usize, section: usize, assigned: bool) {
        self.grid[ta][section] = assigned;
    }

    /// Flips one cell.
    pub fn toggle(&mut self, ta: usize, section: usize) {
        self.grid[ta][section] = !self.grid[ta][section];
    }

    pub fn row(&self, ta: usize) -> &[bool] {
        &self.grid[ta]
    }

    /// Replaces a whole TA row.
    pub fn set_row(&mut self, ta: usize, row: Vec<bool>) {
        debug_assert_eq!(row.len(), self.n_sections());
        self.grid[ta] = row;
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.grid.swap(a, b);
    }

    /// Number of sections assigned to `ta`.
    pub fn ta_load(&self, ta: usize) -> usize {
        self.grid[ta].iter().filter(|&&c| c).count()
    }

    /// Number of TAs covering `section`.
    pub fn section_load(&self, section: usize) -> usize {
        self.grid.iter().filter(|row| row[section]).count()
    }

    /// Sections assigned to `ta`, ascending.
    pub fn sections_of(&self, ta: usize) -> impl Iterator<Item = usize> + '_ {
        self.grid[ta]
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(s, _)| s)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().map(|&c| if c { '1' } else { '0' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
