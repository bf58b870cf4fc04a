//! Booking lifecycle rules: what a creation request turns into, and who may
//! move a booking to which status.
//!
//! The functions here are pure. The repository gathers the facts inside the
//! creating transaction and persists whatever plan comes back.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use super::availability;
use super::booking::{BookingStatus, RentalPeriod, ReservedPeriod};
use super::errors::DomainError;
use super::pricing::{self, PriceQuote, ServiceOffer, TaxRule};

pub const DUPLICATE_PENDING: &str =
    "You already have a pending booking request for this car. Please wait for the vendor's response.";
pub const CAR_UNAVAILABLE: &str = "Car is not available for the selected dates.";
pub const NOT_A_PARTY: &str = "Unauthorized. You can only update your own bookings.";
pub const CUSTOMER_CANCEL_ONLY: &str = "Customers can only cancel bookings.";

pub const MIN_CUSTOMER_AGE: i32 = 18;
pub const MAX_NOTE_CHARS: usize = 10_000;

/// The car as the booking engine needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct CarSnapshot {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub rental_rate: BigDecimal,
    pub tax_id: Option<Uuid>,
    pub pick_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub period: RentalPeriod,
    pub service_ids: Vec<Uuid>,
    pub note: Option<String>,
    pub customer_age: Option<i32>,
}

impl BookingRequest {
    /// Builds a request, rejecting inputs no booking can be made from.
    /// Duplicate service ids are collapsed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: Uuid,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        mut service_ids: Vec<Uuid>,
        note: Option<String>,
        customer_age: Option<i32>,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        if start < today {
            return Err(DomainError::validation(
                "rental_start_date must be today or later",
            ));
        }
        let period = RentalPeriod::new(start, end)?;

        if let Some(age) = customer_age {
            if age < MIN_CUSTOMER_AGE {
                return Err(DomainError::validation(format!(
                    "customer_age must be at least {}",
                    MIN_CUSTOMER_AGE
                )));
            }
        }
        if note.as_ref().is_some_and(|n| n.chars().count() > MAX_NOTE_CHARS) {
            return Err(DomainError::validation(format!(
                "note must not exceed {} characters",
                MAX_NOTE_CHARS
            )));
        }

        service_ids.sort();
        service_ids.dedup();

        Ok(Self {
            customer_id,
            car_id,
            period,
            service_ids,
            note,
            customer_age,
        })
    }
}

/// State observed inside the creating transaction.
#[derive(Debug)]
pub struct CreationFacts<'a> {
    pub car: &'a CarSnapshot,
    pub has_pending: bool,
    pub reserved: &'a [ReservedPeriod],
    pub services: &'a [ServiceOffer],
    pub tax: Option<&'a TaxRule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingPlan {
    pub vendor_id: Uuid,
    pub car_name: String,
    pub quote: PriceQuote,
    pub services: Vec<ServiceOffer>,
    pub pickup_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

pub fn plan_booking(
    request: &BookingRequest,
    facts: CreationFacts<'_>,
) -> Result<BookingPlan, DomainError> {
    if facts.has_pending {
        return Err(DomainError::Conflict(DUPLICATE_PENDING.to_string()));
    }

    if let Some(conflict) = availability::find_conflict(
        &request.period,
        facts.reserved,
        &BookingStatus::BLOCKING,
    ) {
        log::debug!(
            "car {} held by booking {} ({}) for {:?}",
            facts.car.id,
            conflict.booking_id,
            conflict.status,
            conflict.period
        );
        return Err(DomainError::Conflict(CAR_UNAVAILABLE.to_string()));
    }

    let services: Vec<ServiceOffer> = facts
        .services
        .iter()
        .filter(|s| s.published && request.service_ids.contains(&s.id))
        .cloned()
        .collect();

    let quote = pricing::quote(&facts.car.rental_rate, &request.period, &services, facts.tax);

    Ok(BookingPlan {
        vendor_id: facts.car.vendor_id,
        car_name: facts.car.name.clone(),
        quote,
        services,
        pickup_address_id: facts.car.pick_address_id,
        return_address_id: facts.car.return_address_id.or(facts.car.pick_address_id),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Vendor,
    Customer,
}

/// Role-based only: the vendor who owns the car may set any status, the
/// booking's customer may only cancel. Adjacency between states is not
/// checked.
pub fn authorize_transition(
    actor_id: Uuid,
    customer_id: Uuid,
    car_vendor_id: Uuid,
    target: BookingStatus,
) -> Result<ActorRole, DomainError> {
    if actor_id == car_vendor_id {
        return Ok(ActorRole::Vendor);
    }
    if actor_id != customer_id {
        return Err(DomainError::Forbidden(NOT_A_PARTY.to_string()));
    }
    if target != BookingStatus::Cancelled {
        return Err(DomainError::Forbidden(CUSTOMER_CANCEL_ONLY.to_string()));
    }
    Ok(ActorRole::Customer)
}

/// Moving a booking into a status that holds the car requires its period to
/// be free of every other blocking reservation.
pub fn ensure_hold_is_free(
    booking_id: Uuid,
    period: &RentalPeriod,
    target: BookingStatus,
    reserved: &[ReservedPeriod],
) -> Result<(), DomainError> {
    if !target.is_blocking() {
        return Ok(());
    }
    let others: Vec<ReservedPeriod> = reserved
        .iter()
        .filter(|r| r.booking_id != booking_id)
        .cloned()
        .collect();
    if let Some(conflict) = availability::find_conflict(period, &others, &BookingStatus::BLOCKING) {
        log::debug!(
            "booking {} cannot become {}: booking {} holds {:?}",
            booking_id,
            target,
            conflict.booking_id,
            conflict.period
        );
        return Err(DomainError::Conflict(CAR_UNAVAILABLE.to_string()));
    }
    Ok(())
}
