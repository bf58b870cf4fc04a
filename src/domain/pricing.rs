//! Rental price computation.
//!
//! All arithmetic is done on `BigDecimal`. Rates and service prices are
//! already in minor-unit precision, so only the percentage tax can produce
//! extra digits; it is rounded half-up to the currency's minor unit once, and
//! the total is derived from the rounded figures so that
//! `total == sub_total + tax_amount` holds exactly.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use uuid::Uuid;

use super::booking::RentalPeriod;
use super::errors::DomainError;

/// Digits after the decimal point for stored money values.
pub const MONEY_SCALE: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    Flat,
    PerDay,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::Flat => "flat",
            PricingMode::PerDay => "per_day",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" | "once" => Ok(PricingMode::Flat),
            "per_day" => Ok(PricingMode::PerDay),
            other => Err(DomainError::Internal(format!(
                "unknown service price type '{}'",
                other
            ))),
        }
    }
}

/// An add-on service as seen by the pricing calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffer {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub mode: PricingMode,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxRule {
    pub id: Uuid,
    pub percentage: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub rental_days: i64,
    pub car_price: BigDecimal,
    pub service_amount: BigDecimal,
    pub sub_total: BigDecimal,
    pub tax_amount: BigDecimal,
    pub total: BigDecimal,
}

pub fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
}

/// Prices a rental. Unpublished services are skipped rather than rejected.
pub fn quote(
    rental_rate: &BigDecimal,
    period: &RentalPeriod,
    services: &[ServiceOffer],
    tax: Option<&TaxRule>,
) -> PriceQuote {
    let rental_days = period.rental_days();
    let days = BigDecimal::from(rental_days);

    let car_price = rental_rate * &days;

    let service_amount = services
        .iter()
        .filter(|s| s.published)
        .fold(BigDecimal::from(0), |acc, s| match s.mode {
            PricingMode::PerDay => acc + &s.price * &days,
            PricingMode::Flat => acc + &s.price,
        });

    let sub_total = round_money(&(&car_price + &service_amount));

    let tax_amount = match tax {
        Some(rule) if rule.percentage != BigDecimal::from(0) => {
            round_money(&(&sub_total * &rule.percentage / BigDecimal::from(100)))
        }
        _ => round_money(&BigDecimal::from(0)),
    };

    let total = &sub_total + &tax_amount;

    PriceQuote {
        rental_days,
        car_price: round_money(&car_price),
        service_amount: round_money(&service_amount),
        sub_total,
        tax_amount,
        total,
    }
}
