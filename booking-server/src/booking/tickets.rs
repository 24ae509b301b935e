//! Ticket sales, the capacity-integrity core.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    BookingError, BookingResult, Journey, JourneyId, Passenger, SeatClass, Ticket,
};
use crate::store::TicketStore;

/// Sells tickets and answers seat-availability queries.
///
/// Selling is the one operation where a race can corrupt an invariant:
/// two sales both seeing one free seat. The service therefore holds the
/// ticket store's sale lock across its whole count-then-create sequence.
pub struct TicketService {
    tickets: Arc<TicketStore>,
}

impl TicketService {
    /// Builds a service over the given ticket store.
    pub fn new(tickets: Arc<TicketStore>) -> Self {
        TicketService { tickets }
    }

    /// Sells one ticket to `passenger` for `journey` in `class`.
    ///
    /// Capacity comes from the journey's train snapshot: the seat sum of
    /// that class's wagons. The sale fails with `Oversell` when the class
    /// is full; a failed sale creates nothing.
    pub fn sell(
        &self,
        passenger: Passenger,
        journey: &Journey,
        class: SeatClass,
    ) -> BookingResult<Ticket> {
        if !journey.has_train() {
            return Err(BookingError::validation("journey has no assigned train"));
        }

        // Everything from the count to the save happens under the sale
        // lock; concurrent sales serialize here.
        let _sale = self.tickets.lock_sales();

        let capacity = journey.capacity(class);
        let sold = self
            .tickets
            .count_by_journey_and_class(journey.id(), class);
        if sold >= capacity {
            return Err(BookingError::Oversell(format!(
                "no {class} class seats left on journey {}: capacity {capacity}, sold {sold}",
                journey.id()
            )));
        }

        let ticket = Ticket::new(passenger, journey.id(), class);
        self.tickets.save(ticket.clone());
        debug!(ticket_id = %ticket.id(), journey_id = %journey.id(), %class, "sold ticket");
        Ok(ticket)
    }

    /// Snapshot of every ticket sold for one journey.
    pub fn tickets_for_journey(&self, journey_id: JourneyId) -> Vec<Ticket> {
        self.tickets.by_journey(journey_id)
    }

    /// Seats still sellable for one journey and class. Never negative,
    /// even if a re-assigned train shrank the capacity under the sold
    /// count.
    pub fn available_seats(&self, journey: &Journey, class: SeatClass) -> usize {
        let capacity = journey.capacity(class);
        let sold = self
            .tickets
            .count_by_journey_and_class(journey.id(), class);
        capacity.saturating_sub(sold)
    }

    /// Snapshot of every ticket in the system. Order is not defined.
    pub fn list_all(&self) -> Vec<Ticket> {
        self.tickets.all()
    }
}
