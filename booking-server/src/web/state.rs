//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::booking::{
    JourneyService, PassengerService, PersonnelService, TicketService, TrainService,
};

/// Shared application state.
///
/// Holds one instance of every booking service plus the directory boarding
/// lists are exported into. Services are constructed once at startup and
/// injected here; handlers only ever borrow them.
#[derive(Clone)]
pub struct AppState {
    /// Passenger registration and lookup
    pub passengers: Arc<PassengerService>,

    /// Crew registration and certifications
    pub personnel: Arc<PersonnelService>,

    /// Train creation and composition
    pub trains: Arc<TrainService>,

    /// Journey scheduling, assignment and operability
    pub journeys: Arc<JourneyService>,

    /// Ticket sales and availability
    pub tickets: Arc<TicketService>,

    /// Directory boarding-list files are written into
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        passengers: PassengerService,
        personnel: PersonnelService,
        trains: TrainService,
        journeys: JourneyService,
        tickets: TicketService,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            passengers: Arc::new(passengers),
            personnel: Arc::new(personnel),
            trains: Arc::new(trains),
            journeys: Arc::new(journeys),
            tickets: Arc::new(tickets),
            export_dir: Arc::new(export_dir),
        }
    }
}
