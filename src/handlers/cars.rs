use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::handlers::Actor;
use crate::AppBookingService;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AvailabilityParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FutureBookingResponse {
    pub booking_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FutureBookingsResponse {
    pub bookings: Vec<FutureBookingResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HasBookedResponse {
    pub has_booked: bool,
}

/// GET /cars/{car_id}/availability
///
/// `true` when no confirmed, processing or completed booking overlaps the
/// inclusive range. Pending bookings never block.
#[utoipa::path(
    get,
    path = "/cars/{car_id}/availability",
    params(
        ("car_id" = Uuid, Path, description = "Car UUID"),
        ("start_date" = NaiveDate, Query, description = "First rental day (YYYY-MM-DD)"),
        ("end_date" = NaiveDate, Query, description = "Last rental day (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Availability for the range", body = AvailabilityResponse),
        (status = 404, description = "Car not found"),
        (status = 422, description = "End date before start date"),
    ),
    tag = "cars"
)]
pub async fn check_availability(
    service: web::Data<AppBookingService>,
    path: web::Path<Uuid>,
    query: web::Query<AvailabilityParams>,
) -> Result<HttpResponse, AppError> {
    let car_id = path.into_inner();
    let AvailabilityParams {
        start_date,
        end_date,
    } = query.into_inner();

    let available =
        web::block(move || service.check_availability(car_id, start_date, end_date)).await??;

    Ok(HttpResponse::Ok().json(AvailabilityResponse { available }))
}

/// GET /cars/{car_id}/future-bookings
///
/// Current and upcoming reservations holding the car, earliest first.
#[utoipa::path(
    get,
    path = "/cars/{car_id}/future-bookings",
    params(("car_id" = Uuid, Path, description = "Car UUID")),
    responses(
        (status = 200, description = "Upcoming reservations", body = FutureBookingsResponse),
    ),
    tag = "cars"
)]
pub async fn future_bookings(
    service: web::Data<AppBookingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let car_id = path.into_inner();
    let today = Utc::now().date_naive();

    let reserved =
        web::block(move || service.upcoming_bookings_for_car(car_id, today)).await??;

    let bookings = reserved
        .into_iter()
        .map(|r| FutureBookingResponse {
            booking_id: r.booking_id,
            start_date: r.period.start(),
            end_date: r.period.end(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(FutureBookingsResponse { bookings }))
}

/// GET /cars/{car_id}/booked
#[utoipa::path(
    get,
    path = "/cars/{car_id}/booked",
    params(
        ("car_id" = Uuid, Path, description = "Car UUID"),
        ("X-User-Id" = Uuid, Header, description = "Authenticated customer id"),
    ),
    responses(
        (status = 200, description = "Whether the caller ever booked this car", body = HasBookedResponse),
        (status = 401, description = "Missing or invalid actor"),
    ),
    tag = "cars"
)]
pub async fn has_booked(
    service: web::Data<AppBookingService>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let car_id = path.into_inner();

    let has_booked =
        web::block(move || service.has_customer_booked(actor.0, car_id)).await??;

    Ok(HttpResponse::Ok().json(HasBookedResponse { has_booked }))
}
