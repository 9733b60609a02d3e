use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub courier_name: String,
    pub log_level: String,
    pub sim_default_orders: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            courier_name: env::var("COURIER_NAME")
                .unwrap_or_else(|_| crate::models::account::DEFAULT_NAME.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            sim_default_orders: parse_or_default("SIM_DEFAULT_ORDERS", 10)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Config(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
