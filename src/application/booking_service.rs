use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::availability;
use crate::domain::booking::{
    BookingStatus, BookingSummary, BookingView, CustomerBookingFilter, Page, RentalPeriod,
    ReservedPeriod, StatusChange, VendorBookingFilter,
};
use crate::domain::errors::DomainError;
use crate::domain::lifecycle::BookingRequest;
use crate::domain::ports::BookingRepository;

pub const DEFAULT_PER_PAGE: i64 = 15;
pub const MAX_PER_PAGE: i64 = 100;

/// Input for [`BookingService::create_booking`].
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub service_ids: Vec<Uuid>,
    pub note: Option<String>,
    pub customer_age: Option<i32>,
}

pub struct BookingService<R> {
    repo: R,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn check_availability(
        &self,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<bool, DomainError> {
        let requested = RentalPeriod::new(start_date, end_date)?;
        if self.repo.find_car(car_id)?.is_none() {
            return Err(DomainError::not_found("Car"));
        }

        let reserved = self
            .repo
            .reserved_periods(car_id, &requested, &BookingStatus::BLOCKING)?;
        let available =
            availability::is_available(&requested, &reserved, &BookingStatus::BLOCKING);
        log::debug!(
            "car {} {}..{} available={}",
            car_id,
            start_date,
            end_date,
            available
        );
        Ok(available)
    }

    pub fn create_booking(
        &self,
        input: NewBooking,
        today: NaiveDate,
    ) -> Result<BookingView, DomainError> {
        let request = BookingRequest::new(
            input.customer_id,
            input.car_id,
            input.start_date,
            input.end_date,
            input.service_ids,
            input.note,
            input.customer_age,
            today,
        )?;

        match self.repo.create(&request, today) {
            Ok(booking) => {
                log::info!(
                    "booking {} created for car {} by customer {} (total {})",
                    booking.booking_number,
                    booking.car.car_id,
                    booking.customer.id,
                    booking.amount
                );
                Ok(booking)
            }
            Err(DomainError::Conflict(msg)) => {
                log::warn!(
                    "booking rejected for car {} by customer {}: {}",
                    request.car_id,
                    request.customer_id,
                    msg
                );
                Err(DomainError::Conflict(msg))
            }
            Err(e) => Err(e),
        }
    }

    pub fn update_status(
        &self,
        actor_id: Uuid,
        booking_id: Uuid,
        target: &str,
    ) -> Result<StatusChange, DomainError> {
        let target = BookingStatus::parse_target(target)?;

        match self.repo.update_status(actor_id, booking_id, target) {
            Ok(change) => {
                log::info!(
                    "booking {} moved {} -> {} by {}",
                    change.booking.booking_number,
                    change.previous,
                    change.booking.status,
                    actor_id
                );
                Ok(change)
            }
            Err(DomainError::Forbidden(msg)) => {
                log::warn!(
                    "actor {} may not move booking {} to {}: {}",
                    actor_id,
                    booking_id,
                    target,
                    msg
                );
                Err(DomainError::Forbidden(msg))
            }
            Err(DomainError::Conflict(msg)) => {
                log::warn!(
                    "booking {} cannot move to {}: {}",
                    booking_id,
                    target,
                    msg
                );
                Err(DomainError::Conflict(msg))
            }
            Err(e) => Err(e),
        }
    }

    pub fn customer_bookings(
        &self,
        customer_id: Uuid,
        status: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Page<BookingSummary>, DomainError> {
        let filter = CustomerBookingFilter {
            status: status.map(str::parse::<BookingStatus>).transpose()?,
        };
        self.repo.list_for_customer(
            customer_id,
            &filter,
            page.max(1),
            per_page.clamp(1, MAX_PER_PAGE),
        )
    }

    pub fn vendor_bookings(
        &self,
        vendor_id: Uuid,
        status: Option<&str>,
        car_id: Option<Uuid>,
    ) -> Result<Vec<BookingSummary>, DomainError> {
        let filter = VendorBookingFilter {
            status: status.map(str::parse::<BookingStatus>).transpose()?,
            car_id,
        };
        self.repo.list_for_vendor(vendor_id, &filter)
    }

    /// Reservations still ahead of (or running on) `today` that hold the car.
    pub fn upcoming_bookings_for_car(
        &self,
        car_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<ReservedPeriod>, DomainError> {
        self.repo
            .upcoming_for_car(car_id, today, &BookingStatus::BLOCKING)
    }

    pub fn has_customer_booked(&self, customer_id: Uuid, car_id: Uuid) -> Result<bool, DomainError> {
        self.repo.has_customer_booked(customer_id, car_id)
    }
}
