//! Assignment criteria. Every score is a penalty count: lower is better.

use super::data::{AssignmentData, Preference};
use super::solution::Assignment;
use std::collections::HashSet;

/// Sections assigned beyond each TA's `max_assigned`, summed over TAs.
pub fn overallocation(data: &AssignmentData, a: &Assignment) -> f64 {
    (0..a.n_tas())
        .map(|ta| {
            let load = a.ta_load(ta) as u64;
            load.saturating_sub(u64::from(data.max_assigned[ta]))
        })
        .sum::<u64>() as f64
}

/// Number of TAs holding two or more sections that meet at the same time.
pub fn conflicts(data: &AssignmentData, a: &Assignment) -> f64 {
    (0..a.n_tas())
        .filter(|&ta| {
            let mut seen = HashSet::new();
            a.sections_of(ta)
                .any(|s| !seen.insert(data.section_times[s].as_str()))
        })
        .count() as f64
}

/// TAs missing from each section's `min_ta`, summed over sections.
pub fn undersupport(data: &AssignmentData, a: &Assignment) -> f64 {
    (0..a.n_sections())
        .map(|s| u64::from(data.min_tas[s]).saturating_sub(a.section_load(s) as u64))
        .sum::<u64>() as f64
}

/// Assignments to sections the TA marked unwilling.
pub fn unwilling(data: &AssignmentData, a: &Assignment) -> f64 {
    count_with_preference(data, a, Preference::Unwilling)
}

/// Assignments to sections the TA marked willing but not preferred.
pub fn unpreferred(data: &AssignmentData, a: &Assignment) -> f64 {
    count_with_preference(data, a, Preference::Willing)
}

/// Sections with no TA at all.
pub fn no_tas(_data: &AssignmentData, a: &Assignment) -> f64 {
    (0..a.n_sections())
        .filter(|&s| a.section_load(s) == 0)
        .count() as f64
}

fn count_with_preference(data: &AssignmentData, a: &Assignment, pref: Preference) -> f64 {
    (0..a.n_tas())
        .map(|ta| {
            a.sections_of(ta)
                .filter(|&s| data.preferences[ta][s] == pref)
                .count()
        })
        .sum::<usize>() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::data::tests::{SECTIONS, TAS};

    fn data() -> AssignmentData {
        AssignmentData::from_readers(SECTIONS.as_bytes(), TAS.as_bytes()).unwrap()
    }

    // Ann: max 1, prefs P P U. Bob: max 2, prefs W U P.
    // Sections 0 and 1 share a time slot; min_ta = 1, 2, 1.

    #[test]
    fn test_empty_assignment() {
        let d = data();
        let a = Assignment::empty(2, 3);
        assert_eq!(overallocation(&d, &a), 0.0);
        assert_eq!(conflicts(&d, &a), 0.0);
        assert_eq!(undersupport(&d, &a), 4.0);
        assert_eq!(unwilling(&d, &a), 0.0);
        assert_eq!(unpreferred(&d, &a), 0.0);
        assert_eq!(no_tas(&d, &a), 3.0);
    }

    #[test]
    fn test_without_tas_every_section_is_uncovered() {
        let tas = "ta_id,name,max_assigned,0,1,2\n";
        let d = AssignmentData::from_readers(SECTIONS.as_bytes(), tas.as_bytes()).unwrap();
        assert_eq!(d.n_tas(), 0);

        let a = Assignment::empty(d.n_tas(), d.n_sections());
        assert_eq!(a.n_sections(), 3);
        assert_eq!(no_tas(&d, &a), 3.0);
        assert_eq!(undersupport(&d, &a), 4.0);
        assert_eq!(overallocation(&d, &a), 0.0);
        assert_eq!(conflicts(&d, &a), 0.0);
        assert_eq!(unwilling(&d, &a), 0.0);
    }

    #[test]
    fn test_full_assignment() {
        let d = data();
        let a = Assignment::from_rows([[1u8, 1, 1], [1, 1, 1]]);
        // Ann 3 - 1, Bob 3 - 2.
        assert_eq!(overallocation(&d, &a), 3.0);
        // Both hold sections 0 and 1.
        assert_eq!(conflicts(&d, &a), 2.0);
        assert_eq!(undersupport(&d, &a), 0.0);
        // Ann on 2, Bob on 1.
        assert_eq!(unwilling(&d, &a), 2.0);
        // Bob on 0.
        assert_eq!(unpreferred(&d, &a), 1.0);
        assert_eq!(no_tas(&d, &a), 0.0);
    }

    #[test]
    fn test_good_assignment() {
        let d = data();
        let a = Assignment::from_rows([[1u8, 0, 0], [0, 1, 1]]);
        assert_eq!(overallocation(&d, &a), 0.0);
        assert_eq!(conflicts(&d, &a), 0.0);
        // Section 1 needs two TAs.
        assert_eq!(undersupport(&d, &a), 1.0);
        assert_eq!(unwilling(&d, &a), 1.0);
        assert_eq!(unpreferred(&d, &a), 0.0);
        assert_eq!(no_tas(&d, &a), 0.0);
    }
}
