use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::booking::{
    AddressView, BookedCar, BookedService, BookingStatus, CustomerSnapshot, RentalPeriod,
    ReservedPeriod,
};
use crate::domain::errors::DomainError;
use crate::domain::lifecycle::CarSnapshot;
use crate::domain::pricing::{ServiceOffer, TaxRule};
use crate::schema::{
    booking_cars, booking_services, bookings, car_addresses, cars, customers, services, taxes,
};

// ── Rows owned by the booking engine ─────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookingRow {
    pub id: Uuid,
    pub status: String,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_age: Option<i32>,
    pub vendor_id: Uuid,
    pub note: Option<String>,
    pub booking_number: String,
    pub transaction_id: String,
    pub sub_total: BigDecimal,
    pub tax_amount: BigDecimal,
    pub amount: BigDecimal,
    pub currency_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRow {
    pub fn status(&self) -> Result<BookingStatus, DomainError> {
        self.status.parse().map_err(|_| {
            DomainError::Internal(format!(
                "booking {} has unknown status '{}'",
                self.id, self.status
            ))
        })
    }

    pub fn customer(&self) -> CustomerSnapshot {
        CustomerSnapshot {
            id: self.customer_id,
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
            phone: self.customer_phone.clone(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow {
    pub id: Uuid,
    pub status: String,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_age: Option<i32>,
    pub vendor_id: Uuid,
    pub note: Option<String>,
    pub booking_number: String,
    pub transaction_id: String,
    pub sub_total: BigDecimal,
    pub tax_amount: BigDecimal,
    pub amount: BigDecimal,
    pub currency_id: i32,
    pub payment_method: String,
    pub payment_status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = booking_cars)]
#[diesel(belongs_to(BookingRow, foreign_key = booking_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookingCarRow {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub car_id: Uuid,
    pub car_name: String,
    pub price: BigDecimal,
    pub currency_id: i32,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub pickup_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl BookingCarRow {
    pub fn period(&self) -> Result<RentalPeriod, DomainError> {
        RentalPeriod::new(self.rental_start_date, self.rental_end_date).map_err(|_| {
            DomainError::Internal(format!("booking car {} has an inverted period", self.id))
        })
    }

    pub fn to_booked_car(&self) -> Result<BookedCar, DomainError> {
        Ok(BookedCar {
            car_id: self.car_id,
            car_name: self.car_name.clone(),
            price: self.price.clone(),
            period: self.period()?,
            pickup_address_id: self.pickup_address_id,
            return_address_id: self.return_address_id,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = booking_cars)]
pub struct NewBookingCarRow {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub car_id: Uuid,
    pub car_name: String,
    pub price: BigDecimal,
    pub currency_id: i32,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub pickup_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = booking_services)]
pub struct NewBookingServiceRow {
    pub booking_id: Uuid,
    pub service_id: Uuid,
}

/// `(booking id, status, start, end)` as loaded for availability checks.
pub type ReservationTuple = (Uuid, String, NaiveDate, NaiveDate);

pub fn reserved_period(row: ReservationTuple) -> Result<ReservedPeriod, DomainError> {
    let (booking_id, status, start, end) = row;
    Ok(ReservedPeriod {
        booking_id,
        status: status.parse().map_err(|_| {
            DomainError::Internal(format!("booking {} has unknown status '{}'", booking_id, status))
        })?,
        period: RentalPeriod::new(start, end).map_err(|_| {
            DomainError::Internal(format!("booking {} has an inverted period", booking_id))
        })?,
    })
}

// ── Collaborator read models ─────────────────────────────────────────────────

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CarRow {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Uuid,
    pub rental_rate: BigDecimal,
    pub tax_id: Option<Uuid>,
    pub pick_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

impl From<CarRow> for CarSnapshot {
    fn from(row: CarRow) -> Self {
        CarSnapshot {
            id: row.id,
            name: row.name,
            vendor_id: row.vendor_id,
            rental_rate: row.rental_rate,
            tax_id: row.tax_id,
            pick_address_id: row.pick_address_id,
            return_address_id: row.return_address_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ServiceRow {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub price_type: String,
    pub published: bool,
}

impl TryFrom<ServiceRow> for ServiceOffer {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(ServiceOffer {
            id: row.id,
            name: row.name,
            price: row.price,
            mode: row.price_type.parse()?,
            published: row.published,
        })
    }
}

impl TryFrom<ServiceRow> for BookedService {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(BookedService {
            id: row.id,
            name: row.name,
            price: row.price,
            mode: row.price_type.parse()?,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = taxes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaxRow {
    pub id: Uuid,
    pub percentage: BigDecimal,
}

impl From<TaxRow> for TaxRule {
    fn from(row: TaxRow) -> Self {
        TaxRule {
            id: row.id,
            percentage: row.percentage,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = car_addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AddressRow {
    pub id: Uuid,
    pub detail_address: String,
}

pub fn address_view((row, city): (AddressRow, Option<String>)) -> AddressView {
    AddressView {
        id: row.id,
        detail_address: row.detail_address,
        city,
    }
}
