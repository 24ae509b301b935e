//! Domain types for the booking core.
//!
//! This module contains the entity model: people, train composition,
//! journeys and tickets. Validated newtypes (`NationalId`, `TrainId`, the
//! generated IDs) enforce their invariants at construction time, so code
//! that receives these types can trust their validity; structural rules
//! (wagon limits, crew minimums, positive seat counts) live with the
//! entities that own them.

mod error;
mod id;
mod journey;
mod national_id;
mod person;
mod ticket;
mod time;
mod train;

pub use error::{BookingError, BookingResult};
pub use id::{InvalidId, JourneyId, TicketId};
pub use journey::{Journey, MIN_CONDUCTORS, MIN_STEWARDS};
pub use national_id::{InvalidNationalId, NationalId};
pub use person::{InvalidRole, Passenger, Personnel, PersonnelRole};
pub use ticket::Ticket;
pub use time::{TimeError, parse_date, parse_datetime};
pub use train::{
    InvalidLocomotiveClass, InvalidSeatClass, InvalidTrainId, InvalidWagon, Locomotive,
    LocomotiveClass, SeatClass, Train, TrainId, Wagon,
};
