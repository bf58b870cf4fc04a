pub mod bookings;
pub mod cars;

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::errors::AppError;

/// Header carrying the authenticated user's id, set by the upstream
/// authentication layer.
pub const ACTOR_HEADER: &str = "X-User-Id";

/// The authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct Actor(pub Uuid);

impl FromRequest for Actor {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let actor = req
            .headers()
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .map(Actor)
            .ok_or_else(|| {
                AppError::Unauthorized("Unauthenticated. Please login first.".to_string())
            });
        ready(actor)
    }
}
