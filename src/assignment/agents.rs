//! Assignment agents.
//!
//! Each agent takes sampled copies of stored assignments and returns one
//! modified assignment. When an agent's trigger condition does not hold
//! (no overallocated TA, no undersupported section, ...) it returns its
//! first input unchanged. Agents fail only when handed fewer inputs than
//! they need, which happens when the population is empty.

use super::data::{AssignmentData, Preference};
use super::solution::Assignment;
use crate::evo::AgentError;
use rand::seq::IndexedRandom;
use rand::Rng;

fn take_first(picks: Vec<Assignment>) -> Result<Assignment, AgentError> {
    picks
        .into_iter()
        .next()
        .ok_or_else(|| "agent received no assignment".into())
}

/// TAs holding at least one section they marked unwilling.
fn tas_with_unwilling(data: &AssignmentData, a: &Assignment) -> Vec<usize> {
    (0..a.n_tas())
        .filter(|&ta| {
            a.sections_of(ta)
                .any(|s| data.preferences[ta][s] == Preference::Unwilling)
        })
        .collect()
}

/// Swaps the rows of two random TAs.
pub fn swapper<R: Rng>(_data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    if a.n_tas() > 0 {
        let i = rng.random_range(0..a.n_tas());
        let j = rng.random_range(0..a.n_tas());
        a.swap_rows(i, j);
    }
    Ok(a)
}

/// Copies one random TA row from the second input into the first.
pub fn trader<R: Rng>(_data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut picks = picks.into_iter();
    let mut a = picks.next().ok_or("trader received no assignment")?;
    let donor = picks.next().ok_or("trader needs two assignments")?;
    if a.n_tas() > 0 {
        let ta = rng.random_range(0..a.n_tas());
        a.set_row(ta, donor.row(ta).to_vec());
    }
    Ok(a)
}

/// Moves one TA off an unwilling section onto an open section they did not
/// mark unwilling.
pub fn eliminate_unwilling<R: Rng>(data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    let Some(&ta) = tas_with_unwilling(data, &a).choose(rng) else {
        return Ok(a);
    };

    let prefs = &data.preferences[ta];
    let unwilling: Vec<usize> = a
        .sections_of(ta)
        .filter(|&s| prefs[s] == Preference::Unwilling)
        .collect();
    let open: Vec<usize> = (0..a.n_sections())
        .filter(|&s| !a.is_assigned(ta, s) && prefs[s] != Preference::Unwilling)
        .collect();

    if let (Some(&drop), Some(&take)) = (unwilling.choose(rng), open.choose(rng)) {
        a.set(ta, drop, false);
        a.set(ta, take, true);
    }
    Ok(a)
}

/// Unassigns one random section from a random overallocated TA.
pub fn reallocate<R: Rng>(data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    let over: Vec<usize> = (0..a.n_tas())
        .filter(|&ta| a.ta_load(ta) > data.max_assigned[ta] as usize)
        .collect();
    let Some(&ta) = over.choose(rng) else {
        return Ok(a);
    };

    let assigned: Vec<usize> = a.sections_of(ta).collect();
    if let Some(&s) = assigned.choose(rng) {
        a.set(ta, s, false);
    }
    Ok(a)
}

/// Flips one random cell.
pub fn change_assigned<R: Rng>(_data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    if a.n_tas() > 0 && a.n_sections() > 0 {
        let ta = rng.random_range(0..a.n_tas());
        let s = rng.random_range(0..a.n_sections());
        a.toggle(ta, s);
    }
    Ok(a)
}

/// Assigns a random TA to a random undersupported section.
pub fn min_under<R: Rng>(data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    let under: Vec<usize> = (0..a.n_sections())
        .filter(|&s| a.section_load(s) < data.min_tas[s] as usize)
        .collect();
    if let Some(&s) = under.choose(rng) {
        if a.n_tas() > 0 {
            let ta = rng.random_range(0..a.n_tas());
            a.set(ta, s, true);
        }
    }
    Ok(a)
}

/// Unassigns every unwilling section of one random TA.
pub fn lessen_unwilling<R: Rng>(data: &AssignmentData, picks: Vec<Assignment>, rng: &mut R) -> Result<Assignment, AgentError> {
    let mut a = take_first(picks)?;
    if let Some(&ta) = tas_with_unwilling(data, &a).choose(rng) {
        for s in 0..a.n_sections() {
            if data.preferences[ta][s] == Preference::Unwilling {
                a.set(ta, s, false);
            }
        }
    }
    Ok(a)
}
