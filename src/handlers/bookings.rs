use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::booking_service::{NewBooking, DEFAULT_PER_PAGE};
use crate::domain::booking::{AddressView, BookingSummary, BookingView, CustomerContact};
use crate::errors::AppError;
use crate::handlers::Actor;
use crate::AppBookingService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    /// Add-on service ids. Unknown or unpublished ids are ignored.
    #[serde(default)]
    pub services: Vec<Uuid>,
    #[validate(length(max = 10000))]
    pub note: Option<String>,
    #[validate(range(min = 18))]
    pub customer_age: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of `pending`, `processing`, `completed`, `cancelled`.
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookedCarResponse {
    pub car_id: Uuid,
    pub car_name: String,
    /// Car-portion price fixed at booking time.
    pub price: String,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub rental_days: i64,
    pub pickup_address_id: Option<Uuid>,
    pub return_address_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookedServiceResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub price_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_number: String,
    pub status: String,
    pub customer: CustomerResponse,
    pub customer_age: Option<i32>,
    pub vendor_id: Uuid,
    pub note: Option<String>,
    pub transaction_id: String,
    pub sub_total: String,
    pub tax_amount: String,
    pub amount: String,
    pub currency_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub car: BookedCarResponse,
    pub services: Vec<BookedServiceResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingView> for BookingResponse {
    fn from(b: BookingView) -> Self {
        Self {
            id: b.id,
            booking_number: b.booking_number,
            status: b.status.to_string(),
            customer: CustomerResponse {
                id: b.customer.id,
                name: b.customer.name,
                email: b.customer.email,
                phone: b.customer.phone,
            },
            customer_age: b.customer_age,
            vendor_id: b.vendor_id,
            note: b.note,
            transaction_id: b.transaction_id,
            sub_total: b.sub_total.to_string(),
            tax_amount: b.tax_amount.to_string(),
            amount: b.amount.to_string(),
            currency_id: b.currency_id,
            payment_method: b.payment_method,
            payment_status: b.payment_status,
            car: BookedCarResponse {
                car_id: b.car.car_id,
                car_name: b.car.car_name,
                price: b.car.price.to_string(),
                rental_start_date: b.car.period.start(),
                rental_end_date: b.car.period.end(),
                rental_days: b.car.period.rental_days(),
                pickup_address_id: b.car.pickup_address_id,
                return_address_id: b.car.return_address_id,
            },
            services: b
                .services
                .into_iter()
                .map(|s| BookedServiceResponse {
                    id: s.id,
                    name: s.name,
                    price: s.price.to_string(),
                    price_type: s.mode.to_string(),
                })
                .collect(),
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressResponse {
    pub id: Uuid,
    pub detail_address: String,
    pub city: Option<String>,
}

impl From<AddressView> for AddressResponse {
    fn from(a: AddressView) -> Self {
        Self {
            id: a.id,
            detail_address: a.detail_address,
            city: a.city,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerContactResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub avatar: Option<String>,
}

impl From<CustomerContact> for CustomerContactResponse {
    fn from(c: CustomerContact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            age: c.age,
            avatar: c.avatar,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RentalDatesResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rental_days: i64,
}

/// `calculated_price` uses the car's current rate; `booking_price` and
/// `total_amount` are what the booking was priced at.
#[derive(Debug, Serialize, ToSchema)]
pub struct PricingResponse {
    pub daily_rate: String,
    pub rental_days: i64,
    pub calculated_price: String,
    pub booking_price: String,
    pub total_amount: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingSummaryResponse {
    pub booking_id: Uuid,
    pub booking_number: String,
    pub status: String,
    pub car_id: Uuid,
    pub car_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerContactResponse>,
    pub pickup_address: Option<AddressResponse>,
    pub return_address: Option<AddressResponse>,
    pub rental_dates: RentalDatesResponse,
    pub pricing: PricingResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingSummary> for BookingSummaryResponse {
    fn from(s: BookingSummary) -> Self {
        Self {
            booking_id: s.booking_id,
            booking_number: s.booking_number,
            status: s.status.to_string(),
            car_id: s.car_id,
            car_name: s.car_name,
            customer: s.customer.map(Into::into),
            pickup_address: s.pickup_address.map(Into::into),
            return_address: s.return_address.map(Into::into),
            rental_dates: RentalDatesResponse {
                start_date: s.period.start(),
                end_date: s.period.end(),
                rental_days: s.pricing.rental_days,
            },
            pricing: PricingResponse {
                daily_rate: s.pricing.daily_rate.to_string(),
                rental_days: s.pricing.rental_days,
                calculated_price: s.pricing.calculated_price.to_string(),
                booking_price: s.pricing.booking_price.to_string(),
                total_amount: s.pricing.total_amount.to_string(),
            },
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: BookingResponse,
    pub total_amount: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusUpdateResponse {
    pub message: String,
    pub previous_status: String,
    pub booking: BookingResponse,
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct MyBookingsParams {
    pub status: Option<String>,
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 15, maximum 100.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationResponse {
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MyBookingsResponse {
    pub message: String,
    pub bookings: Vec<BookingSummaryResponse>,
    pub pagination: PaginationResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VendorBookingsParams {
    pub status: Option<String>,
    pub car_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VendorBookingsResponse {
    pub message: String,
    pub bookings: Vec<BookingSummaryResponse>,
    pub total_bookings: usize,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /bookings
///
/// Creates a pending booking for the calling customer. The availability
/// check, pricing and inserts run in one transaction holding a lock on the
/// car.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    params(("X-User-Id" = Uuid, Header, description = "Authenticated customer id")),
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 401, description = "Missing or invalid actor"),
        (status = 404, description = "Car or customer not found"),
        (status = 409, description = "Dates taken or a pending booking already exists"),
        (status = 422, description = "Invalid input"),
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    service: web::Data<AppBookingService>,
    actor: Actor,
    body: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    body.validate()?;

    let input = NewBooking {
        customer_id: actor.0,
        car_id: body.car_id,
        start_date: body.rental_start_date,
        end_date: body.rental_end_date,
        service_ids: body.services,
        note: body.note,
        customer_age: body.customer_age,
    };
    let today = Utc::now().date_naive();

    let booking = web::block(move || service.create_booking(input, today)).await??;
    let total_amount = booking.amount.to_string();

    Ok(HttpResponse::Created().json(CreateBookingResponse {
        message: "Booking created successfully!".to_string(),
        booking: booking.into(),
        total_amount,
    }))
}

/// PATCH /bookings/{id}/status
///
/// The car's vendor may set any status; the booking's customer may only
/// cancel. A status that holds the car is refused while another booking
/// holds an overlapping period.
#[utoipa::path(
    patch,
    path = "/bookings/{id}/status",
    request_body = UpdateStatusRequest,
    params(
        ("id" = Uuid, Path, description = "Booking UUID"),
        ("X-User-Id" = Uuid, Header, description = "Authenticated vendor or customer id"),
    ),
    responses(
        (status = 200, description = "Status updated", body = StatusUpdateResponse),
        (status = 403, description = "Actor may not make this change"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Another booking already holds the car for these dates"),
        (status = 422, description = "Unknown status"),
    ),
    tag = "bookings"
)]
pub async fn update_booking_status(
    service: web::Data<AppBookingService>,
    actor: Actor,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let booking_id = path.into_inner();
    let target = body.into_inner().status;

    let change =
        web::block(move || service.update_status(actor.0, booking_id, &target)).await??;

    Ok(HttpResponse::Ok().json(StatusUpdateResponse {
        message: "Booking status updated successfully!".to_string(),
        previous_status: change.previous.to_string(),
        booking: change.booking.into(),
    }))
}

/// GET /bookings/mine
///
/// The calling customer's bookings, newest first.
#[utoipa::path(
    get,
    path = "/bookings/mine",
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default 15, max 100)"),
        ("X-User-Id" = Uuid, Header, description = "Authenticated customer id"),
    ),
    responses(
        (status = 200, description = "Paginated bookings", body = MyBookingsResponse),
        (status = 401, description = "Missing or invalid actor"),
    ),
    tag = "bookings"
)]
pub async fn my_bookings(
    service: web::Data<AppBookingService>,
    actor: Actor,
    query: web::Query<MyBookingsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let page = web::block(move || {
        service.customer_bookings(actor.0, params.status.as_deref(), params.page, params.per_page)
    })
    .await??;

    let pagination = PaginationResponse {
        current_page: page.page,
        last_page: page.last_page(),
        per_page: page.per_page,
        total: page.total,
    };

    Ok(HttpResponse::Ok().json(MyBookingsResponse {
        message: "Bookings retrieved successfully!".to_string(),
        bookings: page.items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// GET /vendor/bookings
///
/// Bookings across every car the calling vendor owns, newest first.
#[utoipa::path(
    get,
    path = "/vendor/bookings",
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("car_id" = Option<Uuid>, Query, description = "Only bookings for this car (ignored unless owned)"),
        ("X-User-Id" = Uuid, Header, description = "Authenticated vendor id"),
    ),
    responses(
        (status = 200, description = "Vendor bookings", body = VendorBookingsResponse),
        (status = 401, description = "Missing or invalid actor"),
    ),
    tag = "bookings"
)]
pub async fn vendor_bookings(
    service: web::Data<AppBookingService>,
    actor: Actor,
    query: web::Query<VendorBookingsParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let bookings = web::block(move || {
        service.vendor_bookings(actor.0, params.status.as_deref(), params.car_id)
    })
    .await??;

    let message = if bookings.is_empty() {
        "No bookings found for this vendor."
    } else {
        "Vendor bookings retrieved successfully!"
    };

    Ok(HttpResponse::Ok().json(VendorBookingsResponse {
        message: message.to_string(),
        total_bookings: bookings.len(),
        bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}
