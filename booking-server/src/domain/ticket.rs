//! Sold tickets.

use super::{JourneyId, Passenger, SeatClass, TicketId};

/// Proof of a completed sale: one passenger, one journey, one class.
///
/// The passenger is captured as a snapshot at sale time. The journey is
/// referenced by ID because journeys keep changing after tickets are sold
/// (train re-assignment, growing crew).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: TicketId,
    passenger: Passenger,
    journey: JourneyId,
    class: SeatClass,
}

impl Ticket {
    /// Issues a ticket with a fresh ID.
    pub fn new(passenger: Passenger, journey: JourneyId, class: SeatClass) -> Self {
        Ticket {
            id: TicketId::new(),
            passenger,
            journey,
            class,
        }
    }

    /// Returns the generated ticket ID.
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the passenger the ticket was sold to.
    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    /// Returns the ID of the journey the ticket is valid for.
    pub fn journey(&self) -> JourneyId {
        self.journey
    }

    /// Returns the seat class the ticket was sold in.
    pub fn class(&self) -> SeatClass {
        self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NationalId;
    use chrono::NaiveDate;

    #[test]
    fn tickets_get_distinct_ids() {
        let passenger = Passenger::new(
            "Anna".into(),
            "Smith".into(),
            NationalId::parse("88.09.25-567.89").unwrap(),
            NaiveDate::from_ymd_opt(1988, 9, 25).unwrap(),
        );
        let journey = JourneyId::new();

        let a = Ticket::new(passenger.clone(), journey, SeatClass::First);
        let b = Ticket::new(passenger, journey, SeatClass::First);

        assert_ne!(a.id(), b.id());
        assert_eq!(a.journey(), b.journey());
        assert_eq!(a.class(), SeatClass::First);
        assert_eq!(a.passenger().full_name(), "Anna Smith");
    }
}
