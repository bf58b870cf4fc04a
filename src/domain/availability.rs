use super::booking::{BookingStatus, RentalPeriod, ReservedPeriod};

/// Returns the first reservation that holds the car during `requested`.
///
/// Only reservations whose status is in `blocking` count; pending and
/// cancelled bookings never make a car unavailable.
pub fn find_conflict<'a>(
    requested: &RentalPeriod,
    reserved: &'a [ReservedPeriod],
    blocking: &[BookingStatus],
) -> Option<&'a ReservedPeriod> {
    reserved
        .iter()
        .find(|r| blocking.contains(&r.status) && r.period.overlaps(requested))
}

pub fn is_available(
    requested: &RentalPeriod,
    reserved: &[ReservedPeriod],
    blocking: &[BookingStatus],
) -> bool {
    find_conflict(requested, reserved, blocking).is_none()
}
