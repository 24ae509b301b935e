//! Booking services.
//!
//! One service per aggregate: passengers, personnel, trains, journeys and
//! tickets. Services own input validation and cross-entity rules, mutate
//! state exclusively through the stores, and surface every failure as a
//! [`BookingError`](crate::domain::BookingError). They never call each
//! other; the caller wires entities between them.

mod clock;
mod journeys;
mod passengers;
mod personnel;
mod tickets;
mod trains;

pub use clock::{Clock, SystemClock};
pub use journeys::JourneyService;
pub use passengers::PassengerService;
pub use personnel::PersonnelService;
pub use tickets::TicketService;
pub use trains::TrainService;

use crate::domain::{BookingError, BookingResult};

/// Trims `value` and rejects blank input, naming the offending field.
pub(crate) fn non_blank(value: &str, field: &str) -> BookingResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::validation(format!("{field} cannot be blank")));
    }
    Ok(trimmed.to_string())
}
