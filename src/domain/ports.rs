use chrono::NaiveDate;
use uuid::Uuid;

use super::booking::{
    BookingStatus, BookingSummary, BookingView, CustomerBookingFilter, Page, RentalPeriod,
    ReservedPeriod, StatusChange, VendorBookingFilter,
};
use super::errors::DomainError;
use super::lifecycle::{BookingRequest, CarSnapshot};

pub trait BookingRepository: Send + Sync + 'static {
    fn find_car(&self, car_id: Uuid) -> Result<Option<CarSnapshot>, DomainError>;

    /// Reservations for `car_id` in one of `statuses` that could intersect
    /// `window`.
    fn reserved_periods(
        &self,
        car_id: Uuid,
        window: &RentalPeriod,
        statuses: &[BookingStatus],
    ) -> Result<Vec<ReservedPeriod>, DomainError>;

    /// Runs the whole creation protocol atomically and returns the stored
    /// booking.
    fn create(&self, request: &BookingRequest, today: NaiveDate)
        -> Result<BookingView, DomainError>;

    fn update_status(
        &self,
        actor_id: Uuid,
        booking_id: Uuid,
        target: BookingStatus,
    ) -> Result<StatusChange, DomainError>;

    fn list_for_customer(
        &self,
        customer_id: Uuid,
        filter: &CustomerBookingFilter,
        page: i64,
        per_page: i64,
    ) -> Result<Page<BookingSummary>, DomainError>;

    fn list_for_vendor(
        &self,
        vendor_id: Uuid,
        filter: &VendorBookingFilter,
    ) -> Result<Vec<BookingSummary>, DomainError>;

    fn upcoming_for_car(
        &self,
        car_id: Uuid,
        today: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<ReservedPeriod>, DomainError>;

    fn has_customer_booked(&self, customer_id: Uuid, car_id: Uuid) -> Result<bool, DomainError>;
}
