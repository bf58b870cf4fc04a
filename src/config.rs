use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be at least {min}, got {value}")]
    TooSmall {
        name: &'static str,
        min: u32,
        value: u32,
    },
}

/// Values stamped onto every new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSettings {
    pub currency_id: i32,
    pub payment_method: String,
    pub payment_status: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            currency_id: 1,
            payment_method: "pending".to_string(),
            payment_status: "pending".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
    pub booking: BookingSettings,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let pool_size = parse_or(&lookup, "DATABASE_POOL_SIZE", 10)?;
        if pool_size < 1 {
            return Err(ConfigError::TooSmall {
                name: "DATABASE_POOL_SIZE",
                min: 1,
                value: pool_size,
            });
        }

        Ok(Self {
            database_url,
            host,
            port: parse_or(&lookup, "PORT", 8080)?,
            pool_size,
            booking: BookingSettings {
                currency_id: parse_or(&lookup, "BOOKING_CURRENCY_ID", 1)?,
                ..BookingSettings::default()
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
