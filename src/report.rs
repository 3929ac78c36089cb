//! Tabular summary of an evolution run.
//!
//! Renders the retained front as CSV: a header row with an empty
//! row-index column followed by one column per criterion (registration
//! order), then one row per retained solution.

use crate::evo::{Clock, Evo};
use rand::Rng;
use std::io;
use std::path::Path;

/// Writes the summary table of `evo`'s current population to `writer`.
///
/// ```
/// use u_evo::evo::Evo;
/// use u_evo::report::write_summary;
///
/// let mut evo: Evo<(i32, i32)> = Evo::seeded(1);
/// evo.register_criterion("a", |p: &(i32, i32)| p.0 as f64).unwrap();
/// evo.register_criterion("b", |p: &(i32, i32)| p.1 as f64).unwrap();
/// evo.insert((1, 4));
///
/// let mut out = Vec::new();
/// write_summary(&evo, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), ",a,b\n0,1,4\n");
/// ```
pub fn write_summary<S, R, C, W>(evo: &Evo<S, R, C>, writer: W) -> Result<(), csv::Error>
where
    S: Clone + 'static,
    R: Rng + 'static,
    C: Clock,
    W: io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);

    let names: Vec<&str> = evo.criterion_names().collect();
    let mut header = vec![String::new()];
    header.extend(names.iter().map(|name| name.to_string()));
    wtr.write_record(&header)?;

    // Cells are looked up by column name; a score missing from a key stays blank.
    for (row, (evaluation, _)) in evo.front().enumerate() {
        let mut record = vec![row.to_string()];
        record.extend(names.iter().map(|name| {
            evaluation
                .score(name)
                .map_or_else(String::new, |score| score.to_string())
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the summary table to the file at `path`, replacing it.
pub fn write_summary_file<S, R, C>(evo: &Evo<S, R, C>, path: impl AsRef<Path>) -> Result<(), csv::Error>
where
    S: Clone + 'static,
    R: Rng + 'static,
    C: Clock,
{
    let file = std::fs::File::create(path)?;
    write_summary(evo, io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Point = (i32, i32);

    fn engine() -> Evo<Point> {
        let mut evo = Evo::seeded(1);
        evo.register_criterion("over", |p: &Point| p.0 as f64).unwrap();
        evo.register_criterion("under", |p: &Point| p.1 as f64).unwrap();
        evo
    }

    #[test]
    fn test_header_only_for_empty_population() {
        let evo = engine();
        let mut out = Vec::new();
        write_summary(&evo, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",over,under\n");
    }

    #[test]
    fn test_one_row_per_retained_solution() {
        let mut evo = engine();
        evo.insert((5, 1));
        evo.insert((3, 3));
        evo.insert((5, 5));
        evo.prune();

        let mut out = Vec::new();
        write_summary(&evo, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![",over,under", "0,5,1", "1,3,3"]);
    }

    #[test]
    fn test_fractional_scores() {
        let mut evo: Evo<f64> = Evo::seeded(1);
        evo.register_criterion("half", |v: &f64| v / 2.0).unwrap();
        evo.insert(3.0);

        let mut out = Vec::new();
        write_summary(&evo, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",half\n0,1.5\n");
    }

    #[test]
    fn test_write_file() {
        let mut evo = engine();
        evo.insert((2, 7));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary_table.csv");
        write_summary_file(&evo, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, ",over,under\n0,2,7\n");
    }
}
