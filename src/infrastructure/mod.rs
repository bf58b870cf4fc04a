pub mod booking_repo;
pub mod models;
