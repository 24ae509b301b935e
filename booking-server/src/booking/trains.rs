//! Train creation and composition.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    BookingError, BookingResult, Locomotive, LocomotiveClass, SeatClass, Train, TrainId, Wagon,
};
use crate::store::TrainStore;

/// Creates trains and grows their wagon consists.
pub struct TrainService {
    store: Arc<TrainStore>,
}

impl TrainService {
    /// Builds a service over the given store.
    pub fn new(store: Arc<TrainStore>) -> Self {
        TrainService { store }
    }

    /// Creates a train with the given locomotive class and no wagons.
    pub fn create_train(&self, id: TrainId, class: LocomotiveClass) -> BookingResult<Train> {
        let train = Train::new(id, Locomotive::new(class));
        if !self.store.save_new(train.clone()) {
            return Err(BookingError::validation(format!(
                "a train with id {} already exists",
                train.id()
            )));
        }

        debug!(train_id = %train.id(), class = %class, "created train");
        Ok(train)
    }

    /// Attaches a wagon to an existing train and returns the updated
    /// train.
    ///
    /// The limit check and the append run under the store's write lock,
    /// so concurrent adds cannot push a train past its locomotive limit.
    pub fn add_wagon(
        &self,
        id: &TrainId,
        wagon_number: u32,
        class: SeatClass,
        seats: usize,
    ) -> BookingResult<Train> {
        let wagon = Wagon::new(wagon_number, class, seats)
            .map_err(|e| BookingError::validation(e.to_string()))?;

        self.store
            .update(id, |train| {
                train.add_wagon(wagon)?;
                Ok(train.clone())
            })
            .ok_or_else(|| BookingError::not_found("train", id))?
    }

    /// Looks up a train by ID.
    pub fn find_by_id(&self, id: &TrainId) -> BookingResult<Train> {
        self.store
            .find(id)
            .ok_or_else(|| BookingError::not_found("train", id))
    }

    /// Snapshot of every train. Order is not defined.
    pub fn list_all(&self) -> Vec<Train> {
        self.store.all()
    }
}
