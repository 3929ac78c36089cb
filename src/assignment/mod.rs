//! TA-to-section assignment.
//!
//! A solution is a TA × section grid ([`Assignment`]). Six penalty criteria
//! score it and seven agents perturb it; [`register_all`] wires them into
//! an [`Evo`] engine.
//!
//! | criterion        | counts                                             |
//! |------------------|----------------------------------------------------|
//! | `overallocation` | sections beyond each TA's `max_assigned`           |
//! | `conflicts`      | TAs holding two sections at the same time          |
//! | `undersupport`   | TAs missing from each section's `min_ta`           |
//! | `unwilling`      | assignments the TA marked `U`                      |
//! | `unpreferred`    | assignments the TA marked `W`                      |
//! | `no_tas`         | sections with nobody assigned                      |

mod agents;
mod data;
mod objectives;
mod solution;

pub use agents::{
    change_assigned, eliminate_unwilling, lessen_unwilling, min_under, reallocate, swapper, trader,
};
pub use data::{AssignmentData, DataError, Preference};
pub use objectives::{conflicts, no_tas, overallocation, undersupport, unpreferred, unwilling};
pub use solution::Assignment;

use crate::evo::{AgentError, Clock, Evo, EvoError};
use rand::Rng;
use std::sync::Arc;

type Objective = fn(&AssignmentData, &Assignment) -> f64;

/// Criteria in registration order.
pub const CRITERIA: [(&str, Objective); 6] = [
    ("overallocation", overallocation),
    ("conflicts", conflicts),
    ("undersupport", undersupport),
    ("unwilling", unwilling),
    ("unpreferred", unpreferred),
    ("no_tas", no_tas),
];

/// Registers the six criteria and seven agents on `evo`.
pub fn register_all<R, C>(evo: &mut Evo<Assignment, R, C>, data: Arc<AssignmentData>) -> Result<(), EvoError>
where
    R: Rng + 'static,
    C: Clock,
{
    for (name, objective) in CRITERIA {
        let data = Arc::clone(&data);
        evo.register_criterion(name, move |a: &Assignment| objective(&data, a))?;
    }

    register(evo, &data, "swapper", swapper::<R>, 1);
    register(evo, &data, "trader", trader::<R>, 2);
    register(evo, &data, "eliminate_unwilling", eliminate_unwilling::<R>, 1);
    register(evo, &data, "reallocate", reallocate::<R>, 1);
    register(evo, &data, "change_assigned", change_assigned::<R>, 1);
    register(evo, &data, "min_under", min_under::<R>, 1);
    register(evo, &data, "lessen_unwilling", lessen_unwilling::<R>, 1);
    Ok(())
}

fn register<R, C>(
    evo: &mut Evo<Assignment, R, C>,
    data: &Arc<AssignmentData>,
    name: &str,
    agent: fn(&AssignmentData, Vec<Assignment>, &mut R) -> Result<Assignment, AgentError>,
    arity: usize,
) where
    R: Rng + 'static,
    C: Clock,
{
    let data = Arc::clone(data);
    evo.register_fallible_agent(name, move |picks, rng: &mut R| agent(&data, picks, rng), arity);
}

/// A random starting assignment sized to `data`.
///
/// Each cell is assigned with probability `density`.
pub fn seed<R: Rng>(data: &AssignmentData, density: f64, rng: &mut R) -> Assignment {
    Assignment::random(data.n_tas(), data.n_sections(), density, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evo::{EvoConfig, RecordingObserver};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn data() -> Arc<AssignmentData> {
        Arc::new(
            AssignmentData::from_readers(data::tests::SECTIONS.as_bytes(), data::tests::TAS.as_bytes())
                .unwrap(),
        )
    }

    #[test]
    fn test_register_all() {
        let mut evo: Evo<Assignment> = Evo::seeded(1);
        register_all(&mut evo, data()).unwrap();

        assert_eq!(
            evo.criterion_names().collect::<Vec<_>>(),
            vec!["overallocation", "conflicts", "undersupport", "unwilling", "unpreferred", "no_tas"]
        );
        assert_eq!(evo.agent_names().count(), 7);
        assert_eq!(evo.agent_arity("trader").unwrap(), 2);
    }

    #[test]
    fn test_evaluation_matches_objectives() {
        let d = data();
        let mut evo: Evo<Assignment> = Evo::seeded(1);
        register_all(&mut evo, Arc::clone(&d)).unwrap();

        let a = Assignment::from_rows([[1u8, 1, 1], [1, 1, 1]]);
        let e = evo.evaluate(&a);
        assert_eq!(e.to_vec(), vec![3.0, 2.0, 0.0, 2.0, 1.0, 0.0]);
        assert_eq!(evo.criterion_score("conflicts", &a).unwrap(), conflicts(&d, &a));
    }

    #[test]
    fn test_short_run_front_not_dominated_by_seed() {
        let d = data();
        let mut evo: Evo<Assignment> = Evo::seeded(11);
        register_all(&mut evo, Arc::clone(&d)).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let start = seed(&d, 0.5, &mut rng);
        let start_eval = evo.evaluate(&start);
        evo.insert(start);

        let config = EvoConfig::new(300)
            .with_dominance_interval(20)
            .with_status_interval(100)
            .with_time_limit_secs(60);
        let mut observer = RecordingObserver::default();
        let summary = evo.evolve_with_observer(&config, &mut observer).unwrap();

        assert_eq!(summary.iterations, 300);
        assert_eq!(observer.reports.len(), 3);
        assert!(evo.size() >= 1);
        // Nothing on the front is dominated by the seed.
        for (e, a) in evo.front() {
            assert!(!start_eval.dominates(e));
            assert_eq!(a.n_tas(), 2);
        }
    }
}
