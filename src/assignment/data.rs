//! Section and TA tables.

use std::fs::File;
use std::io;
use std::path::Path;

/// Errors raised while loading assignment data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table} table has no `{column}` column")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table} table row {row}: invalid value `{value}` in column `{column}`")]
    InvalidValue {
        table: &'static str,
        row: usize,
        column: String,
        value: String,
    },

    #[error("TA table has {found} preference columns but there are {expected} sections")]
    ShapeMismatch { expected: usize, found: usize },
}

/// A TA's stated preference for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// `U`: will not take the section.
    Unwilling,
    /// `W`: will take it but would rather not.
    Willing,
    /// `P`: wants the section.
    Preferred,
}

impl Preference {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "U" => Some(Self::Unwilling),
            "W" => Some(Self::Willing),
            "P" => Some(Self::Preferred),
            _ => None,
        }
    }
}

/// Immutable problem data shared by every criterion and agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentData {
    /// Meeting time of each section; equal strings clash.
    pub section_times: Vec<String>,
    /// Minimum number of TAs each section needs.
    pub min_tas: Vec<u32>,
    /// Maximum number of sections each TA may take.
    pub max_assigned: Vec<u32>,
    /// `preferences[ta][section]`.
    pub preferences: Vec<Vec<Preference>>,
}

impl AssignmentData {
    /// Number of TAs (grid rows).
    pub fn n_tas(&self) -> usize {
        self.max_assigned.len()
    }

    /// Number of sections (grid columns).
    pub fn n_sections(&self) -> usize {
        self.min_tas.len()
    }

    /// Loads the section and TA tables from CSV files.
    pub fn from_csv_paths(sections: impl AsRef<Path>, tas: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::from_readers(File::open(sections)?, File::open(tas)?)
    }

    /// Loads the section and TA tables from CSV readers.
    ///
    /// The section table needs `daytime` and `min_ta` columns, one row per
    /// section. The TA table needs a `max_assigned` column and one
    /// preference column per section, starting at the column headed `0`
    /// and running to the last column.
    pub fn from_readers<A: io::Read, B: io::Read>(sections: A, tas: B) -> Result<Self, DataError> {
        let (section_times, min_tas) = read_sections(sections)?;
        let (max_assigned, preferences) = read_tas(tas, min_tas.len())?;
        Ok(Self {
            section_times,
            min_tas,
            max_assigned,
            preferences,
        })
    }
}

fn column(headers: &csv::StringRecord, table: &'static str, name: &'static str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(DataError::MissingColumn { table, column: name })
}

fn parse_count(record: &csv::StringRecord, idx: usize, table: &'static str, row: usize, name: &str) -> Result<u32, DataError> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse().map_err(|_| DataError::InvalidValue {
        table,
        row,
        column: name.to_string(),
        value: raw.to_string(),
    })
}

fn read_sections<R: io::Read>(reader: R) -> Result<(Vec<String>, Vec<u32>), DataError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let time_idx = column(&headers, "sections", "daytime")?;
    let min_idx = column(&headers, "sections", "min_ta")?;

    let mut times = Vec::new();
    let mut mins = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        times.push(record.get(time_idx).unwrap_or("").trim().to_string());
        mins.push(parse_count(&record, min_idx, "sections", row, "min_ta")?);
    }
    Ok((times, mins))
}

type TaTable = (Vec<u32>, Vec<Vec<Preference>>);

fn read_tas<R: io::Read>(reader: R, n_sections: usize) -> Result<TaTable, DataError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let max_idx = column(&headers, "tas", "max_assigned")?;
    let first_pref = column(&headers, "tas", "0")?;

    let found = headers.len() - first_pref;
    if found != n_sections {
        return Err(DataError::ShapeMismatch {
            expected: n_sections,
            found,
        });
    }

    let mut max_assigned = Vec::new();
    let mut preferences = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        max_assigned.push(parse_count(&record, max_idx, "tas", row, "max_assigned")?);

        let prefs = (first_pref..headers.len())
            .map(|c| {
                let raw = record.get(c).unwrap_or("");
                Preference::parse(raw).ok_or_else(|| DataError::InvalidValue {
                    table: "tas",
                    row,
                    column: headers.get(c).unwrap_or("").to_string(),
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        preferences.push(prefs);
    }
    Ok((max_assigned, preferences))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SECTIONS: &str = "\
section,instructor,daytime,location,students,topic,min_ta,max_ta
0,Smith,R 1145-125,Room 1,30,Intro,1,2
1,Smith,R 1145-125,Room 2,30,Intro,2,3
2,Jones,W 950-1130,Room 3,25,Data,1,2
";

    pub(crate) const TAS: &str = "\
ta_id,name,max_assigned,0,1,2
0,Ann,1,P,P,U
1,Bob,2,W,U,P
";

    #[test]
    fn test_load_from_readers() {
        let data = AssignmentData::from_readers(SECTIONS.as_bytes(), TAS.as_bytes()).unwrap();
        assert_eq!(data.n_sections(), 3);
        assert_eq!(data.n_tas(), 2);
        assert_eq!(data.section_times[0], "R 1145-125");
        assert_eq!(data.min_tas, vec![1, 2, 1]);
        assert_eq!(data.max_assigned, vec![1, 2]);
        assert_eq!(
            data.preferences[1],
            vec![Preference::Willing, Preference::Unwilling, Preference::Preferred]
        );
    }

    #[test]
    fn test_missing_column() {
        let sections = "section,daytime\n0,R 1145-125\n";
        let err = AssignmentData::from_readers(sections.as_bytes(), TAS.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn { table: "sections", column: "min_ta" }
        ));
    }

    #[test]
    fn test_invalid_preference() {
        let tas = "ta_id,max_assigned,0,1,2\n0,1,P,X,U\n";
        let err = AssignmentData::from_readers(SECTIONS.as_bytes(), tas.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { ref value, .. } if value == "X"));
    }

    #[test]
    fn test_invalid_count() {
        let tas = "ta_id,max_assigned,0,1,2\n0,many,P,P,U\n";
        let err = AssignmentData::from_readers(SECTIONS.as_bytes(), tas.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { row: 0, .. }));
    }

    #[test]
    fn test_shape_mismatch() {
        let tas = "ta_id,max_assigned,0,1\n0,1,P,P\n";
        let err = AssignmentData::from_readers(SECTIONS.as_bytes(), tas.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::ShapeMismatch { expected: 3, found: 2 }));
    }

    #[test]
    fn test_load_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let sections = dir.path().join("sections.csv");
        let tas = dir.path().join("tas.csv");
        std::fs::write(&sections, SECTIONS).unwrap();
        std::fs::write(&tas, TAS).unwrap();

        let data = AssignmentData::from_csv_paths(&sections, &tas).unwrap();
        assert_eq!(data.n_tas(), 2);

        let missing = AssignmentData::from_csv_paths(dir.path().join("nope.csv"), &tas);
        assert!(matches!(missing, Err(DataError::Io(_))));
    }
}
