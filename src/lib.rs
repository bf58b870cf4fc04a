pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::booking_service::BookingService;
use crate::config::BookingSettings;
use crate::errors::AppError;
use crate::infrastructure::booking_repo::DieselBookingRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The booking service as wired for the HTTP layer.
pub type AppBookingService = BookingService<DieselBookingRepository>;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::cars::check_availability,
        handlers::cars::future_bookings,
        handlers::cars::has_booked,
        handlers::bookings::create_booking,
        handlers::bookings::my_bookings,
        handlers::bookings::update_booking_status,
        handlers::bookings::vendor_bookings,
    ),
    components(schemas(
        handlers::cars::AvailabilityResponse,
        handlers::cars::FutureBookingsResponse,
        handlers::cars::HasBookedResponse,
        handlers::bookings::CreateBookingRequest,
        handlers::bookings::CreateBookingResponse,
        handlers::bookings::UpdateStatusRequest,
        handlers::bookings::StatusUpdateResponse,
        handlers::bookings::MyBookingsResponse,
        handlers::bookings::VendorBookingsResponse,
    )),
    tags(
        (name = "cars", description = "Availability lookups"),
        (name = "bookings", description = "Booking creation and lifecycle"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    settings: BookingSettings,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(BookingService::new(DieselBookingRepository::new(
        pool, settings,
    )));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .wrap(Logger::default())
            .service(
                web::scope("/cars/{car_id}")
                    .route(
                        "/availability",
                        web::get().to(handlers::cars::check_availability),
                    )
                    .route(
                        "/future-bookings",
                        web::get().to(handlers::cars::future_bookings),
                    )
                    .route("/booked", web::get().to(handlers::cars::has_booked)),
            )
            .service(
                web::scope("/bookings")
                    .route("", web::post().to(handlers::bookings::create_booking))
                    .route("/mine", web::get().to(handlers::bookings::my_bookings))
                    .route(
                        "/{id}/status",
                        web::patch().to(handlers::bookings::update_booking_status),
                    ),
            )
            .route(
                "/vendor/bookings",
                web::get().to(handlers::bookings::vendor_bookings),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
