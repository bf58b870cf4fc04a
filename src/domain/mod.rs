pub mod availability;
pub mod booking;
pub mod errors;
pub mod lifecycle;
pub mod ports;
pub mod pricing;
