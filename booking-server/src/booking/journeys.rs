//! Journey scheduling, assignment and operability checks.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{
    BookingError, BookingResult, Journey, JourneyId, MIN_CONDUCTORS, MIN_STEWARDS, Personnel,
    Train,
};
use crate::store::JourneyStore;

use super::{Clock, SystemClock, non_blank};

/// Schedules journeys and manages their train and crew assignments.
pub struct JourneyService {
    store: Arc<JourneyStore>,
    clock: Arc<dyn Clock>,
}

impl JourneyService {
    /// Builds a service over the given store, using the system clock.
    pub fn new(store: Arc<JourneyStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Builds a service with an explicit clock, letting tests pin time.
    pub fn with_clock(store: Arc<JourneyStore>, clock: Arc<dyn Clock>) -> Self {
        JourneyService { store, clock }
    }

    /// Schedules a journey between two stations.
    ///
    /// Station names are trimmed and must be non-blank; the departure
    /// must not lie in the past.
    pub fn create(
        &self,
        departure_station: &str,
        arrival_station: &str,
        departure_time: NaiveDateTime,
    ) -> BookingResult<Journey> {
        let departure_station = non_blank(departure_station, "departure station")?;
        let arrival_station = non_blank(arrival_station, "arrival station")?;
        if departure_time < self.clock.now() {
            return Err(BookingError::validation(
                "departure time cannot be in the past",
            ));
        }

        let journey = Journey::new(departure_station, arrival_station, departure_time);
        self.store.save(journey.clone());
        debug!(journey_id = %journey.id(), "scheduled journey");
        Ok(journey)
    }

    /// Assigns a train snapshot to a journey, replacing any previous
    /// assignment, and returns the updated journey.
    pub fn assign_train(&self, journey_id: JourneyId, train: Train) -> BookingResult<Journey> {
        self.store
            .update(&journey_id, |journey| {
                journey.assign_train(train);
                journey.clone()
            })
            .ok_or_else(|| BookingError::not_found("journey", journey_id))
    }

    /// Adds a crew member to a journey and returns the updated journey.
    /// Assignments only ever append; there is no un-assign.
    pub fn assign_personnel(
        &self,
        journey_id: JourneyId,
        personnel: Personnel,
    ) -> BookingResult<Journey> {
        self.store
            .update(&journey_id, |journey| {
                journey.assign_personnel(personnel);
                journey.clone()
            })
            .ok_or_else(|| BookingError::not_found("journey", journey_id))
    }

    /// Checks that a journey is ready to operate: a train is assigned
    /// and the crew meets the staffing minimum.
    pub fn validate_operability(&self, journey_id: JourneyId) -> BookingResult<()> {
        let journey = self.find_by_id(journey_id)?;

        if !journey.has_train() {
            return Err(BookingError::validation("journey has no assigned train"));
        }
        if !journey.crew_meets_minimum() {
            return Err(BookingError::InvalidPersonnel(format!(
                "journey requires at least {MIN_CONDUCTORS} conductor and {MIN_STEWARDS} stewards, \
                 currently assigned: {} personnel",
                journey.personnel().len()
            )));
        }
        Ok(())
    }

    /// Looks up a journey by ID.
    pub fn find_by_id(&self, journey_id: JourneyId) -> BookingResult<Journey> {
        self.store
            .find(&journey_id)
            .ok_or_else(|| BookingError::not_found("journey", journey_id))
    }

    /// Snapshot of every journey. Order is not defined.
    pub fn list_all(&self) -> Vec<Journey> {
        self.store.all()
    }
}
