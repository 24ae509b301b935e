//! Ticket storage and sale serialization.

use std::collections::HashMap;

use parking_lot::{Mutex, MutexGuard, RwLock};

use crate::domain::{JourneyId, SeatClass, Ticket, TicketId};

/// Sold tickets, keyed by generated ticket ID.
///
/// Besides the plain keyed map this store carries the sale lock: a mutex
/// the ticket service holds across its count-then-create sequence, so two
/// concurrent sales can never both observe a free last seat. The lock
/// lives here because it guards this store's data.
pub struct TicketStore {
    entries: RwLock<HashMap<TicketId, Ticket>>,
    sale_lock: Mutex<()>,
}

impl TicketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        TicketStore {
            entries: RwLock::new(HashMap::new()),
            sale_lock: Mutex::new(()),
        }
    }

    /// Acquires the sale lock.
    ///
    /// The ticket service takes this before counting sold tickets and
    /// releases it after persisting the new ticket (or failing).
    pub fn lock_sales(&self) -> MutexGuard<'_, ()> {
        self.sale_lock.lock()
    }

    /// Inserts a ticket under its own ID.
    pub fn save(&self, ticket: Ticket) {
        let mut entries = self.entries.write();
        entries.insert(ticket.id(), ticket);
    }

    /// Returns a snapshot of the ticket with this ID, if present.
    pub fn find(&self, id: &TicketId) -> Option<Ticket> {
        let entries = self.entries.read();
        entries.get(id).cloned()
    }

    /// Returns a snapshot of every ticket. Order is not defined.
    pub fn all(&self) -> Vec<Ticket> {
        let entries = self.entries.read();
        entries.values().cloned().collect()
    }

    /// Snapshot of every ticket sold for one journey.
    pub fn by_journey(&self, journey: JourneyId) -> Vec<Ticket> {
        let entries = self.entries.read();
        entries
            .values()
            .filter(|t| t.journey() == journey)
            .cloned()
            .collect()
    }

    /// Number of tickets sold for one journey in one class.
    pub fn count_by_journey_and_class(&self, journey: JourneyId, class: SeatClass) -> usize {
        let entries = self.entries.read();
        entries
            .values()
            .filter(|t| t.journey() == journey && t.class() == class)
            .count()
    }

    /// Number of stored tickets.
    pub fn len(&self) -> usize {
        let entries = self.entries.read();
        entries.len()
    }

    /// True if nothing has been sold yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}
