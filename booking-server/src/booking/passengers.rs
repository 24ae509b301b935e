//! Passenger registration and lookup.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{BookingError, BookingResult, NationalId, Passenger};
use crate::store::PassengerStore;

use super::{Clock, SystemClock, non_blank};

/// Registers passengers and answers lookups.
pub struct PassengerService {
    store: Arc<PassengerStore>,
    clock: Arc<dyn Clock>,
}

impl PassengerService {
    /// Builds a service over the given store, using the system clock.
    pub fn new(store: Arc<PassengerStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Builds a service with an explicit clock, letting tests pin time.
    pub fn with_clock(store: Arc<PassengerStore>, clock: Arc<dyn Clock>) -> Self {
        PassengerService { store, clock }
    }

    /// Registers a new passenger.
    ///
    /// Names are trimmed and must be non-blank, the birth date must not
    /// lie in the future, and the national ID must not already be
    /// registered. The first registration under an ID wins; later
    /// attempts are rejected, never merged.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        national_id: NationalId,
        birth_date: NaiveDate,
    ) -> BookingResult<Passenger> {
        let first_name = non_blank(first_name, "first name")?;
        let last_name = non_blank(last_name, "last name")?;
        if birth_date > self.clock.now().date() {
            return Err(BookingError::validation(
                "birth date cannot be in the future",
            ));
        }

        let first_name = mark_suspect(first_name);
        let passenger = Passenger::new(first_name, last_name, national_id, birth_date);
        if !self.store.save_new(passenger.clone()) {
            return Err(BookingError::validation(format!(
                "a passenger with national id {} already exists",
                passenger.national_id()
            )));
        }

        debug!(national_id = %passenger.national_id(), "registered passenger");
        Ok(passenger)
    }

    /// Looks up a passenger by national ID.
    pub fn find_by_national_id(&self, national_id: &NationalId) -> BookingResult<Passenger> {
        self.store
            .find(national_id)
            .ok_or_else(|| BookingError::not_found("passenger", national_id))
    }

    /// Snapshot of every registered passenger. Order is not defined.
    pub fn list_all(&self) -> Vec<Passenger> {
        self.store.all()
    }
}

/// Prefixes roughly one first name in four with the legacy marker token.
/// Draws randomness from a fresh UUID so the feature adds no dependency.
#[cfg(feature = "suspect-marking")]
fn mark_suspect(first_name: String) -> String {
    if uuid::Uuid::new_v4().as_bytes()[0] % 4 == 0 {
        format!("verdacht {first_name}")
    } else {
        first_name
    }
}

#[cfg(not(feature = "suspect-marking"))]
fn mark_suspect(first_name: String) -> String {
    first_name
}
