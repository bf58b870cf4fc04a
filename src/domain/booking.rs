use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use uuid::Uuid;

use super::errors::DomainError;
use super::pricing::PricingMode;

// ── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    /// Written by back-office tooling only; never a transition target here.
    Confirmed,
    Processing,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Statuses that hold the car and therefore count as availability conflicts.
    pub const BLOCKING: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Processing,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Processing => "processing",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_blocking(&self) -> bool {
        Self::BLOCKING.contains(self)
    }

    /// Parses a requested target status for a status update. Only the four
    /// lifecycle states are accepted.
    pub fn parse_target(s: &str) -> Result<Self, DomainError> {
        match s.parse()? {
            BookingStatus::Confirmed => Err(DomainError::validation(
                "status must be one of: pending, processing, completed, cancelled",
            )),
            status => Ok(status),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "processing" => Ok(BookingStatus::Processing),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(DomainError::validation(format!(
                "unknown booking status '{}'",
                other
            ))),
        }
    }
}

// ── Rental period ────────────────────────────────────────────────────────────

/// Closed calendar-date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::validation(
                "rental_end_date must be on or after rental_start_date",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Billable days: the day difference, floored to one so same-day
    /// rentals still cost a day.
    pub fn rental_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// Inclusive overlap: `[a,b]` and `[c,d]` intersect iff `a <= d && c <= b`.
    /// A shared boundary day counts as a conflict.
    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

// ── Generated identifiers ────────────────────────────────────────────────────

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_token<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

/// `BK20240701-7Q2ZK4`: the creation date plus six random characters.
/// Uniqueness is enforced by the store; callers retry on collision.
pub fn generate_booking_number<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> String {
    format!("BK{}-{}", today.format("%Y%m%d"), random_token(rng, 6))
}

pub fn generate_transaction_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_token(rng, 32)
}

// ── Write-side views ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookedCar {
    pub car_id: Uuid,
    pub car_name: String,
    /// Car-portion price captured at booking time.
    pub price: BigDecimal,
    pub period: RentalPeriod,
    pub pickup_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookedService {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub mode: PricingMode,
}

/// A booking with its car record and attached services.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub id: Uuid,
    pub booking_number: String,
    pub status: BookingStatus,
    pub customer: CustomerSnapshot,
    pub customer_age: Option<i32>,
    pub vendor_id: Uuid,
    pub note: Option<String>,
    pub transaction_id: String,
    pub sub_total: BigDecimal,
    pub tax_amount: BigDecimal,
    pub amount: BigDecimal,
    pub currency_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub car: BookedCar,
    pub services: Vec<BookedService>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StatusChange {
    pub previous: BookingStatus,
    pub booking: BookingView,
}

/// An existing reservation interval for a car.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedPeriod {
    pub booking_id: Uuid,
    pub status: BookingStatus,
    pub period: RentalPeriod,
}

// ── Read-side projections ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AddressView {
    pub id: Uuid,
    pub detail_address: String,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerContact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub avatar: Option<String>,
}

/// Price recomputed from the car's current rate next to the amounts frozen
/// on the booking, so rate drift is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSnapshot {
    pub daily_rate: BigDecimal,
    pub rental_days: i64,
    pub calculated_price: BigDecimal,
    pub booking_price: BigDecimal,
    pub total_amount: BigDecimal,
}

impl PricingSnapshot {
    pub fn new(
        daily_rate: BigDecimal,
        period: &RentalPeriod,
        booking_price: BigDecimal,
        total_amount: BigDecimal,
    ) -> Self {
        let rental_days = period.rental_days();
        let calculated_price = &daily_rate * BigDecimal::from(rental_days);
        Self {
            daily_rate,
            rental_days,
            calculated_price,
            booking_price,
            total_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub booking_id: Uuid,
    pub booking_number: String,
    pub status: BookingStatus,
    pub car_id: Uuid,
    pub car_name: String,
    /// Only filled for vendor-facing listings.
    pub customer: Option<CustomerContact>,
    pub pickup_address: Option<AddressView>,
    pub return_address: Option<AddressView>,
    pub period: RentalPeriod,
    pub pricing: PricingSnapshot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    pub fn last_page(&self) -> i64 {
        if self.total == 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBookingFilter {
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct VendorBookingFilter {
    pub status: Option<BookingStatus>,
    pub car_id: Option<Uuid>,
}
