use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::app::log::ActivityLog;
use crate::config::Config;
use crate::engine::simulation::{simulate, RatingPolicy};
use crate::models::account::CourierAccount;

const HELP: &str = "\
commands:
  introduce [name]          update the name and show the account card
  order <yes|no> [rating]   report an order; unparsable rating counts as none
  unrated                   report a completed order without a rating
  toggle                    flip the active flag
  reset [name]              reinitialize the account
  simulate <n> [none|random|fixed <rating>]
                            run n completed orders in bulk
  snapshot                  print the account snapshot as JSON
  show                      show the account card
  log                       show the activity log, newest first
  help                      this text
  quit                      exit";

/// What the read loop should do after one command.
pub enum Step {
    Reply(String),
    Quit,
}

/// Holds the account and its activity log; every mutation goes through
/// the account operations.
pub struct Session {
    account: CourierAccount,
    log: ActivityLog,
    default_name: String,
    sim_default_orders: u64,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        let mut log = ActivityLog::default();
        log.push("Session started. Type 'help' for commands.");

        Self {
            account: CourierAccount::new(config.courier_name.clone()),
            log,
            default_name: config.courier_name.clone(),
            sim_default_orders: config.sim_default_orders,
            rng,
        }
    }

    pub fn account(&self) -> &CourierAccount {
        &self.account
    }

    pub fn greeting(&self) -> String {
        format!("{}\nType 'help' for commands.", self.render_card())
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => return Step::Reply(String::new()),
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "introduce" => self.introduce(&args),
            "order" => self.order(&args),
            "unrated" => self.record_order(true, None),
            "toggle" => self.toggle(),
            "reset" => self.reset(&args),
            "simulate" => self.simulate_orders(&args),
            "snapshot" => self.snapshot(),
            "show" => Step::Reply(self.render_card()),
            "log" => Step::Reply(self.log.render()),
            "help" => Step::Reply(HELP.to_string()),
            "quit" | "exit" => Step::Quit,
            other => Step::Reply(format!("unknown command: {other}; try 'help'")),
        }
    }

    fn introduce(&mut self, args: &[&str]) -> Step {
        let name = if args.is_empty() {
            self.default_name.clone()
        } else {
            args.join(" ")
        };
        self.account.name = name.clone();

        info!(name = %name, "introduced");
        self.log.push(format!("Introduced: {name}"));

        Step::Reply(self.render_card())
    }

    fn order(&mut self, args: &[&str]) -> Step {
        let completed = match args.first() {
            Some(&"yes") | Some(&"true") => true,
            Some(&"no") | Some(&"false") => false,
            _ => return Step::Reply("usage: order <yes|no> [rating]".to_string()),
        };

        let rating = args.get(1).and_then(|raw| parse_rating(raw));
        self.record_order(completed, rating)
    }

    fn record_order(&mut self, completed: bool, rating: Option<f64>) -> Step {
        let outcome = self.account.complete_order(completed, rating);
        let snapshot = self.account.introduce();

        info!(
            completed = outcome.completed,
            rating = ?outcome.rating,
            orders = snapshot.completed_orders,
            average = snapshot.average_rating,
            "order recorded"
        );

        let line = format!(
            "{} -> orders: {}, average: {:.2}",
            outcome.message, snapshot.completed_orders, snapshot.average_rating
        );
        self.log.push(line.clone());

        Step::Reply(line)
    }

    fn toggle(&mut self) -> Step {
        let active = self.account.toggle_active();
        let badge = if active { "ACTIVE" } else { "INACTIVE" };

        info!(active, "active state toggled");
        self.log.push(format!("Active state changed to: {badge}"));

        Step::Reply(self.render_card())
    }

    fn reset(&mut self, args: &[&str]) -> Step {
        let name = if args.is_empty() {
            None
        } else {
            Some(args.join(" "))
        };
        self.account.reset(name.as_deref());

        info!(name = %self.account.name, "account reset");
        self.log.push("Account reset to initial state.");

        Step::Reply(self.render_card())
    }

    fn simulate_orders(&mut self, args: &[&str]) -> Step {
        let count = args
            .first()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(self.sim_default_orders);

        let policy = match args.get(1) {
            None | Some(&"random") => RatingPolicy::Random,
            Some(&"none") => RatingPolicy::Unrated,
            Some(&"fixed") => match args.get(2).and_then(|raw| parse_rating(raw)) {
                Some(value) => RatingPolicy::Fixed(value),
                // Unparsable fixed rating degrades to unrated orders.
                None => RatingPolicy::Unrated,
            },
            Some(other) => {
                return Step::Reply(format!(
                    "unknown rating policy: {other}; expected none, random or fixed"
                ));
            }
        };

        let report = simulate(&mut self.account, count, policy, &mut self.rng);
        let snapshot = self.account.introduce();

        let line = format!(
            "Simulated {} orders ({}) -> orders: {}, average: {:.2}",
            report.completed,
            describe_policy(policy),
            snapshot.completed_orders,
            snapshot.average_rating
        );
        self.log.push(line.clone());

        Step::Reply(line)
    }

    fn snapshot(&self) -> Step {
        match serde_json::to_string_pretty(&self.account.introduce()) {
            Ok(json) => Step::Reply(json),
            Err(err) => {
                warn!(error = %err, "failed to serialize snapshot");
                Step::Reply(format!("failed to serialize snapshot: {err}"))
            }
        }
    }

    fn render_card(&self) -> String {
        let snapshot = self.account.introduce();
        let badge = if snapshot.active { "ACTIVE" } else { "INACTIVE" };

        format!(
            "courier: {}\norders:  {}\nrating:  {:.2}\nstatus:  {}",
            snapshot.name, snapshot.completed_orders, snapshot.average_rating, badge
        )
    }
}

/// Normalize free-text rating input: anything that does not parse as a
/// finite number counts as "no rating".
fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn describe_policy(policy: RatingPolicy) -> &'static str {
    match policy {
        RatingPolicy::Unrated => "no rating",
        RatingPolicy::Random => "random ratings",
        RatingPolicy::Fixed(_) => "fixed rating",
    }
}
