use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Courier";
pub const INITIAL_RATING: f64 = 5.0;

const RATING_MIN: f64 = 1.0;
const RATING_MAX: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierAccount {
    pub name: String,
    pub completed_orders: u64,
    pub average_rating: f64,
    pub active: bool,
}

/// Read-only view of the account, with the average rounded for display.
/// The stored average keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub name: String,
    pub completed_orders: u64,
    pub average_rating: f64,
    pub active: bool,
}

/// Result of reporting one order. `rating` is the effective rating
/// (post-clamp, post-default), or `None` when no rating applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub completed: bool,
    pub rating: Option<f64>,
    pub message: String,
}

impl CourierAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed_orders: 0,
            average_rating: INITIAL_RATING,
            active: true,
        }
    }

    pub fn introduce(&self) -> AccountSnapshot {
        AccountSnapshot {
            name: self.name.clone(),
            completed_orders: self.completed_orders,
            average_rating: round2(self.average_rating),
            active: self.active,
        }
    }

    /// Report one order. An uncompleted order leaves the statistics
    /// untouched. A completed order increments the counter; if an
    /// effective rating is available it also moves the running mean.
    ///
    /// Two deliberate policy rules: the very first order without a
    /// rating is recorded as a 5, and a missing rating on later orders
    /// counts the order without touching the average.
    pub fn complete_order(&mut self, completed: bool, rating: Option<f64>) -> OrderOutcome {
        let mut rating = rating.map(effective_rating);

        if !completed {
            return OrderOutcome {
                completed: false,
                rating,
                message: format!(
                    "Order NOT completed. Rating recorded (not counted): {}",
                    describe_rating(rating)
                ),
            };
        }

        if self.completed_orders == 0 && rating.is_none() {
            rating = Some(RATING_MAX);
        }

        if let Some(value) = rating {
            let total = self.average_rating * self.completed_orders as f64 + value;
            self.completed_orders += 1;
            self.average_rating = total / self.completed_orders as f64;
        } else {
            self.completed_orders += 1;
        }

        OrderOutcome {
            completed: true,
            rating,
            message: format!("Order completed. Rating received: {}", describe_rating(rating)),
        }
    }

    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn reset(&mut self, name: Option<&str>) {
        self.name = name.unwrap_or(DEFAULT_NAME).to_string();
        self.completed_orders = 0;
        self.average_rating = INITIAL_RATING;
        self.active = true;
    }
}

impl Default for CourierAccount {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

fn effective_rating(raw: f64) -> f64 {
    round2(raw.clamp(RATING_MIN, RATING_MAX))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn describe_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) => value.to_string(),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_account_snapshot_has_defaults() {
        let account = CourierAccount::new("Alice");
        let snapshot = account.introduce();

        assert_eq!(snapshot.name, "Alice");
        assert_eq!(snapshot.completed_orders, 0);
        assert_eq!(snapshot.average_rating, 5.0);
        assert!(snapshot.active);
    }

    #[test]
    fn average_matches_mean_of_effective_ratings() {
        let mut account = CourierAccount::default();
        let ratings = [4.0, 3.5, 5.0, 2.0, 4.5];

        for r in ratings {
            account.complete_order(true, Some(r));
        }

        let mean: f64 = ratings.iter().sum::<f64>() / ratings.len() as f64;
        assert_eq!(account.completed_orders, ratings.len() as u64);
        assert!((account.average_rating - mean).abs() < 1e-9);
    }

    #[test]
    fn uncompleted_order_changes_nothing() {
        let mut account = CourierAccount::default();
        account.complete_order(true, Some(4.0));

        let outcome = account.complete_order(false, Some(2.0));

        assert!(!outcome.completed);
        assert_eq!(outcome.rating, Some(2.0));
        assert_eq!(account.completed_orders, 1);
        assert_eq!(account.average_rating, 4.0);
    }

    #[test]
    fn rating_below_one_clamps_to_one() {
        let mut account = CourierAccount::default();
        let outcome = account.complete_order(true, Some(0.0));

        assert_eq!(outcome.rating, Some(1.0));
        assert_eq!(account.average_rating, 1.0);
    }

    #[test]
    fn rating_above_five_clamps_to_five() {
        let mut account = CourierAccount::default();
        let outcome = account.complete_order(true, Some(9.0));

        assert_eq!(outcome.rating, Some(5.0));
        assert_eq!(account.average_rating, 5.0);
    }

    #[test]
    fn rating_is_rounded_to_two_decimals_before_use() {
        let mut account = CourierAccount::default();
        let outcome = account.complete_order(true, Some(3.14159));

        assert_eq!(outcome.rating, Some(3.14));
        assert_eq!(account.average_rating, 3.14);
    }

    #[test]
    fn first_unrated_order_defaults_to_five() {
        let mut account = CourierAccount::default();
        let outcome = account.complete_order(true, None);

        assert_eq!(outcome.rating, Some(5.0));
        assert_eq!(account.completed_orders, 1);
        assert_eq!(account.average_rating, 5.0);
    }

    #[test]
    fn later_unrated_order_counts_but_keeps_average() {
        let mut account = CourierAccount::default();
        account.complete_order(true, Some(4.0));

        let outcome = account.complete_order(true, None);

        assert!(outcome.completed);
        assert_eq!(outcome.rating, None);
        assert_eq!(account.completed_orders, 2);
        assert_eq!(account.average_rating, 4.0);
    }

    #[test]
    fn two_rated_orders_average_correctly() {
        let mut account = CourierAccount::default();
        account.complete_order(true, Some(3.0));
        account.complete_order(true, Some(5.0));

        assert_eq!(account.completed_orders, 2);
        assert_eq!(account.average_rating, 4.0);
    }

    #[test]
    fn toggle_active_twice_returns_to_original() {
        let mut account = CourierAccount::default();

        assert!(!account.toggle_active());
        assert!(account.toggle_active());
        assert!(account.active);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut account = CourierAccount::new("Alice");
        account.complete_order(true, Some(2.0));
        account.complete_order(true, Some(3.0));
        account.toggle_active();

        account.reset(Some("X"));

        let snapshot = account.introduce();
        assert_eq!(snapshot.name, "X");
        assert_eq!(snapshot.completed_orders, 0);
        assert_eq!(snapshot.average_rating, 5.0);
        assert!(snapshot.active);
    }

    #[test]
    fn reset_without_name_uses_default() {
        let mut account = CourierAccount::new("Alice");
        account.reset(None);

        assert_eq!(account.name, DEFAULT_NAME);
    }

    #[test]
    fn snapshot_rounds_average_but_storage_keeps_precision() {
        let mut account = CourierAccount::default();
        account.complete_order(true, Some(4.0));
        account.complete_order(true, Some(5.0));
        account.complete_order(true, Some(5.0));

        // 14/3 = 4.666...
        assert!((account.average_rating - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(account.introduce().average_rating, 4.67);
    }
}
