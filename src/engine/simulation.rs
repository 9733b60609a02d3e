use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::account::CourierAccount;

/// How the simulated orders pick their rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RatingPolicy {
    /// No rating; orders count but do not move the average
    /// (except the first-order default inside the account).
    Unrated,
    /// Uniformly random integer in [1,5] per order.
    Random,
    /// Same caller-supplied rating for every order; clamping is left
    /// to the account.
    Fixed(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub requested: u64,
    pub completed: u64,
    pub policy: RatingPolicy,
}

/// Run `count` completed orders against the account. The random source
/// is injected so callers can seed it for deterministic runs.
pub fn simulate<R: Rng>(
    account: &mut CourierAccount,
    count: u64,
    policy: RatingPolicy,
    rng: &mut R,
) -> SimulationReport {
    let requested = count.max(1);
    let mut completed = 0;

    for _ in 0..requested {
        let rating = match policy {
            RatingPolicy::Unrated => None,
            RatingPolicy::Random => Some(rng.gen_range(1..=5) as f64),
            RatingPolicy::Fixed(value) => Some(value),
        };

        let outcome = account.complete_order(true, rating);
        if outcome.completed {
            completed += 1;
        }
    }

    debug!(requested, completed, ?policy, "simulation finished");

    SimulationReport {
        requested,
        completed,
        policy,
    }
}
