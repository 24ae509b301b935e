//! Data transfer objects for web requests and responses.
//!
//! Request fields arrive as plain strings and are parsed at the boundary
//! with the domain `parse` constructors; responses are built from entity
//! snapshots with the `from_*` converters below.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Passenger, Personnel, Ticket, Train, Wagon};

/// Request to register a passenger.
#[derive(Debug, Deserialize)]
pub struct RegisterPassengerRequest {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// National ID, expected as `DD.DD.DD-DDD.DD`
    pub national_id: String,

    /// Birth date in `YYYY-MM-DD` format
    pub birth_date: String,
}

/// A passenger in responses.
#[derive(Debug, Serialize)]
pub struct PassengerResult {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// National ID
    pub national_id: String,

    /// Birth date in `YYYY-MM-DD` format
    pub birth_date: String,
}

impl PassengerResult {
    pub fn from_passenger(passenger: &Passenger) -> Self {
        Self {
            first_name: passenger.first_name().to_string(),
            last_name: passenger.last_name().to_string(),
            national_id: passenger.national_id().as_str().to_string(),
            birth_date: passenger.birth_date().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Response to a passenger registration.
#[derive(Debug, Serialize)]
pub struct RegisterPassengerResponse {
    /// The stored passenger
    #[serde(flatten)]
    pub passenger: PassengerResult,

    /// Set when the national ID does not match the canonical layout;
    /// the registration still went through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request to register a crew member.
#[derive(Debug, Deserialize)]
pub struct RegisterPersonnelRequest {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// National ID, expected as `DD.DD.DD-DDD.DD`
    pub national_id: String,

    /// Birth date in `YYYY-MM-DD` format
    pub birth_date: String,

    /// Role: `conductor`, `steward` or `baggage-handler`
    pub role: String,
}

/// A crew member in responses.
#[derive(Debug, Serialize)]
pub struct PersonnelResult {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// National ID
    pub national_id: String,

    /// Birth date in `YYYY-MM-DD` format
    pub birth_date: String,

    /// Role name
    pub role: String,

    /// Certifications in the order they were recorded
    pub certifications: Vec<String>,
}

impl PersonnelResult {
    pub fn from_personnel(member: &Personnel) -> Self {
        Self {
            first_name: member.first_name().to_string(),
            last_name: member.last_name().to_string(),
            national_id: member.national_id().as_str().to_string(),
            birth_date: member.birth_date().format("%Y-%m-%d").to_string(),
            role: member.role().to_string(),
            certifications: member.certifications().to_vec(),
        }
    }
}

/// Response to a crew registration.
#[derive(Debug, Serialize)]
pub struct RegisterPersonnelResponse {
    /// The stored crew member
    #[serde(flatten)]
    pub personnel: PersonnelResult,

    /// Set when the national ID does not match the canonical layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request to record a certification for a crew member.
#[derive(Debug, Deserialize)]
pub struct AddCertificationRequest {
    /// Free-form certification name
    pub certification: String,
}

/// Request to create a train.
#[derive(Debug, Deserialize)]
pub struct CreateTrainRequest {
    /// Train ID, unique across the operator
    pub train_id: String,

    /// Locomotive class: `class373` or `class374`
    pub locomotive_class: String,
}

/// Request to attach a wagon to a train.
#[derive(Debug, Deserialize)]
pub struct AddWagonRequest {
    /// Wagon number within the train
    pub wagon_number: u32,

    /// Seat class: `first` or `second`
    pub class: String,

    /// Seat count, must be positive
    pub seats: usize,
}

/// A wagon in responses.
#[derive(Debug, Serialize)]
pub struct WagonResult {
    /// Wagon number
    pub number: u32,

    /// Seat class name
    pub class: String,

    /// Seat count
    pub seats: usize,
}

/// A train in responses.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    /// Train ID
    pub train_id: String,

    /// Locomotive class display name
    pub locomotive_class: String,

    /// Wagon limit the locomotive imposes
    pub max_wagons: usize,

    /// Wagons in attachment order
    pub wagons: Vec<WagonResult>,

    /// Seats in first class wagons
    pub first_class_seats: usize,

    /// Seats in second class wagons
    pub second_class_seats: usize,
}

impl TrainResult {
    pub fn from_train(train: &Train) -> Self {
        use crate::domain::SeatClass;

        Self {
            train_id: train.id().as_str().to_string(),
            locomotive_class: train.locomotive().class().name().to_string(),
            max_wagons: train.locomotive().max_wagons(),
            wagons: train.wagons().iter().map(WagonResult::from_wagon).collect(),
            first_class_seats: train.capacity_for(SeatClass::First),
            second_class_seats: train.capacity_for(SeatClass::Second),
        }
    }
}

impl WagonResult {
    pub fn from_wagon(wagon: &Wagon) -> Self {
        Self {
            number: wagon.number(),
            class: wagon.class().to_string(),
            seats: wagon.seats(),
        }
    }
}

/// Request to schedule a journey.
#[derive(Debug, Deserialize)]
pub struct CreateJourneyRequest {
    /// Departure station name
    pub departure_station: String,

    /// Arrival station name
    pub arrival_station: String,

    /// Departure time in `YYYY-MM-DDTHH:MM` format
    pub departure_time: String,
}

/// Request to assign a train to a journey.
#[derive(Debug, Deserialize)]
pub struct AssignTrainRequest {
    /// ID of an existing train
    pub train_id: String,
}

/// Request to assign a crew member to a journey.
#[derive(Debug, Deserialize)]
pub struct AssignPersonnelRequest {
    /// National ID of a registered crew member
    pub national_id: String,
}

/// A journey in responses.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Generated journey ID
    pub id: String,

    /// Departure station name
    pub departure_station: String,

    /// Arrival station name
    pub arrival_station: String,

    /// Departure time in `YYYY-MM-DDTHH:MM` format
    pub departure_time: String,

    /// The assigned train snapshot, if any
    pub train: Option<TrainResult>,

    /// Assigned crew in assignment order
    pub personnel: Vec<PersonnelResult>,
}

impl JourneyResult {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            id: journey.id().to_string(),
            departure_station: journey.departure_station().to_string(),
            arrival_station: journey.arrival_station().to_string(),
            departure_time: journey.departure_time().format("%Y-%m-%dT%H:%M").to_string(),
            train: journey.train().map(TrainResult::from_train),
            personnel: journey
                .personnel()
                .iter()
                .map(PersonnelResult::from_personnel)
                .collect(),
        }
    }
}

/// Response for the operability check of a journey.
#[derive(Debug, Serialize)]
pub struct OperabilityResponse {
    /// Always true; failed checks return an error response instead
    pub operable: bool,
}

/// Request to sell a ticket on a journey.
#[derive(Debug, Deserialize)]
pub struct SellTicketRequest {
    /// National ID of a registered passenger
    pub national_id: String,

    /// Seat class: `first` or `second`
    pub class: String,
}

/// A ticket in responses.
#[derive(Debug, Serialize)]
pub struct TicketResult {
    /// Generated ticket ID
    pub id: String,

    /// ID of the journey the ticket is valid for
    pub journey_id: String,

    /// Seat class name
    pub class: String,

    /// The passenger the ticket was sold to
    pub passenger: PassengerResult,
}

impl TicketResult {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id().to_string(),
            journey_id: ticket.journey().to_string(),
            class: ticket.class().to_string(),
            passenger: PassengerResult::from_passenger(ticket.passenger()),
        }
    }
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Seat class: `first` or `second`
    pub class: String,
}

/// Response for a seat-availability query.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    /// Seat class name
    pub class: String,

    /// Seats still sellable
    pub available: usize,
}

/// Response for a boarding-list export.
#[derive(Debug, Serialize)]
pub struct BoardingListResponse {
    /// Path of the written report file
    pub path: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
