//! HTTP route handlers.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::{
    BookingError, JourneyId, LocomotiveClass, NationalId, PersonnelRole, SeatClass, TrainId,
    parse_date, parse_datetime,
};
use crate::export::BoardingList;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/passengers", post(register_passenger).get(list_passengers))
        .route("/passengers/:national_id", get(find_passenger))
        .route("/personnel", post(register_personnel).get(list_personnel))
        .route("/personnel/:national_id", get(find_personnel))
        .route(
            "/personnel/:national_id/certifications",
            post(add_certification),
        )
        .route("/trains", post(create_train).get(list_trains))
        .route("/trains/:train_id", get(find_train))
        .route("/trains/:train_id/wagons", post(add_wagon))
        .route("/journeys", post(create_journey).get(list_journeys))
        .route("/journeys/:id", get(find_journey))
        .route("/journeys/:id/train", post(assign_train))
        .route("/journeys/:id/personnel", post(assign_personnel))
        .route("/journeys/:id/operability", get(check_operability))
        .route("/journeys/:id/tickets", post(sell_ticket).get(journey_tickets))
        .route("/journeys/:id/availability", get(availability))
        .route("/journeys/:id/boarding-list", post(export_boarding_list))
        .route("/tickets", get(list_tickets))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register a new passenger.
///
/// A national ID outside the canonical `DD.DD.DD-DDD.DD` layout is
/// accepted but flagged with a warning in the response.
async fn register_passenger(
    State(state): State<AppState>,
    Json(req): Json<RegisterPassengerRequest>,
) -> Result<Json<RegisterPassengerResponse>, AppError> {
    let national_id = parse_national_id(&req.national_id)?;
    let birth_date = parse_date(&req.birth_date).map_err(AppError::bad_request)?;

    let passenger = state
        .passengers
        .register(&req.first_name, &req.last_name, national_id, birth_date)?;

    // Warn only about records that were actually stored
    Ok(Json(RegisterPassengerResponse {
        warning: format_warning(passenger.national_id()),
        passenger: PassengerResult::from_passenger(&passenger),
    }))
}

/// List every registered passenger.
async fn list_passengers(State(state): State<AppState>) -> Json<Vec<PassengerResult>> {
    let passengers = state.passengers.list_all();
    Json(passengers.iter().map(PassengerResult::from_passenger).collect())
}

/// Look up a passenger by national ID.
async fn find_passenger(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<PassengerResult>, AppError> {
    let national_id = parse_national_id(&national_id)?;
    let passenger = state.passengers.find_by_national_id(&national_id)?;
    Ok(Json(PassengerResult::from_passenger(&passenger)))
}

/// Register a new crew member.
async fn register_personnel(
    State(state): State<AppState>,
    Json(req): Json<RegisterPersonnelRequest>,
) -> Result<Json<RegisterPersonnelResponse>, AppError> {
    let national_id = parse_national_id(&req.national_id)?;
    let birth_date = parse_date(&req.birth_date).map_err(AppError::bad_request)?;
    let role = PersonnelRole::parse(&req.role).map_err(AppError::bad_request)?;

    let member = state.personnel.register(
        &req.first_name,
        &req.last_name,
        national_id,
        birth_date,
        role,
    )?;

    Ok(Json(RegisterPersonnelResponse {
        warning: format_warning(member.national_id()),
        personnel: PersonnelResult::from_personnel(&member),
    }))
}

/// List every registered crew member.
async fn list_personnel(State(state): State<AppState>) -> Json<Vec<PersonnelResult>> {
    let crew = state.personnel.list_all();
    Json(crew.iter().map(PersonnelResult::from_personnel).collect())
}

/// Look up a crew member by national ID.
async fn find_personnel(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<PersonnelResult>, AppError> {
    let national_id = parse_national_id(&national_id)?;
    let member = state.personnel.find_by_national_id(&national_id)?;
    Ok(Json(PersonnelResult::from_personnel(&member)))
}

/// Record a certification for a crew member.
async fn add_certification(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
    Json(req): Json<AddCertificationRequest>,
) -> Result<Json<PersonnelResult>, AppError> {
    let national_id = parse_national_id(&national_id)?;
    let member = state
        .personnel
        .add_certification(&national_id, &req.certification)?;
    Ok(Json(PersonnelResult::from_personnel(&member)))
}

/// Create a train with no wagons yet.
async fn create_train(
    State(state): State<AppState>,
    Json(req): Json<CreateTrainRequest>,
) -> Result<Json<TrainResult>, AppError> {
    let train_id = TrainId::parse(&req.train_id).map_err(AppError::bad_request)?;
    let class = LocomotiveClass::parse(&req.locomotive_class).map_err(AppError::bad_request)?;

    let train = state.trains.create_train(train_id, class)?;
    Ok(Json(TrainResult::from_train(&train)))
}

/// List every train.
async fn list_trains(State(state): State<AppState>) -> Json<Vec<TrainResult>> {
    let trains = state.trains.list_all();
    Json(trains.iter().map(TrainResult::from_train).collect())
}

/// Look up a train by ID.
async fn find_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<TrainResult>, AppError> {
    let train_id = TrainId::parse(&train_id).map_err(AppError::bad_request)?;
    let train = state.trains.find_by_id(&train_id)?;
    Ok(Json(TrainResult::from_train(&train)))
}

/// Attach a wagon to a train.
async fn add_wagon(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
    Json(req): Json<AddWagonRequest>,
) -> Result<Json<TrainResult>, AppError> {
    let train_id = TrainId::parse(&train_id).map_err(AppError::bad_request)?;
    let class = SeatClass::parse(&req.class).map_err(AppError::bad_request)?;

    let train = state
        .trains
        .add_wagon(&train_id, req.wagon_number, class, req.seats)?;
    Ok(Json(TrainResult::from_train(&train)))
}

/// Schedule a journey.
async fn create_journey(
    State(state): State<AppState>,
    Json(req): Json<CreateJourneyRequest>,
) -> Result<Json<JourneyResult>, AppError> {
    let departure_time = parse_datetime(&req.departure_time).map_err(AppError::bad_request)?;

    let journey = state
        .journeys
        .create(&req.departure_station, &req.arrival_station, departure_time)?;
    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// List every journey.
async fn list_journeys(State(state): State<AppState>) -> Json<Vec<JourneyResult>> {
    let journeys = state.journeys.list_all();
    Json(journeys.iter().map(JourneyResult::from_journey).collect())
}

/// Look up a journey by ID.
async fn find_journey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JourneyResult>, AppError> {
    let journey = state.journeys.find_by_id(parse_journey_id(&id)?)?;
    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// Assign a train to a journey.
///
/// The journey captures a snapshot of the train as it is composed right
/// now; wagons added to the train later do not change the journey.
async fn assign_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AssignTrainRequest>,
) -> Result<Json<JourneyResult>, AppError> {
    let journey_id = parse_journey_id(&id)?;
    let train_id = TrainId::parse(&req.train_id).map_err(AppError::bad_request)?;

    let train = state.trains.find_by_id(&train_id)?;
    let journey = state.journeys.assign_train(journey_id, train)?;
    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// Assign a registered crew member to a journey.
async fn assign_personnel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AssignPersonnelRequest>,
) -> Result<Json<JourneyResult>, AppError> {
    let journey_id = parse_journey_id(&id)?;
    let national_id = parse_national_id(&req.national_id)?;

    let member = state.personnel.find_by_national_id(&national_id)?;
    let journey = state.journeys.assign_personnel(journey_id, member)?;
    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// Check whether a journey can operate.
async fn check_operability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OperabilityResponse>, AppError> {
    state.journeys.validate_operability(parse_journey_id(&id)?)?;
    Ok(Json(OperabilityResponse { operable: true }))
}

/// Sell a ticket on a journey.
async fn sell_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TicketResult>, AppError> {
    let journey_id = parse_journey_id(&id)?;

    // Parse the JSON manually so a rejected sale body can be logged
    let req: SellTicketRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "unparseable sell request");
        AppError::BadRequest {
            message: format!("invalid JSON: {e}"),
        }
    })?;
    let national_id = parse_national_id(&req.national_id)?;
    let class = SeatClass::parse(&req.class).map_err(AppError::bad_request)?;

    let passenger = state.passengers.find_by_national_id(&national_id)?;
    let journey = state.journeys.find_by_id(journey_id)?;
    let ticket = state.tickets.sell(passenger, &journey, class)?;
    Ok(Json(TicketResult::from_ticket(&ticket)))
}

/// List the tickets sold for a journey.
async fn journey_tickets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TicketResult>>, AppError> {
    let journey = state.journeys.find_by_id(parse_journey_id(&id)?)?;
    let tickets = state.tickets.tickets_for_journey(journey.id());
    Ok(Json(tickets.iter().map(TicketResult::from_ticket).collect()))
}

/// Seats still sellable for a journey and class.
async fn availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let class = SeatClass::parse(&query.class).map_err(AppError::bad_request)?;
    let journey = state.journeys.find_by_id(parse_journey_id(&id)?)?;

    Ok(Json(AvailabilityResponse {
        class: class.to_string(),
        available: state.tickets.available_seats(&journey, class),
    }))
}

/// List every sold ticket.
async fn list_tickets(State(state): State<AppState>) -> Json<Vec<TicketResult>> {
    let tickets = state.tickets.list_all();
    Json(tickets.iter().map(TicketResult::from_ticket).collect())
}

/// Write the boarding list for a journey into the export directory.
async fn export_boarding_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardingListResponse>, AppError> {
    let journey = state.journeys.find_by_id(parse_journey_id(&id)?)?;
    let tickets = state.tickets.tickets_for_journey(journey.id());

    let path = BoardingList::compile(journey, tickets)
        .write_to_dir(&state.export_dir)
        .map_err(|e| AppError::Internal {
            message: format!("could not write boarding list: {e}"),
        })?;

    Ok(Json(BoardingListResponse {
        path: path.display().to_string(),
    }))
}

fn parse_national_id(s: &str) -> Result<NationalId, AppError> {
    NationalId::parse(s).map_err(AppError::bad_request)
}

fn parse_journey_id(s: &str) -> Result<JourneyId, AppError> {
    JourneyId::parse(s).map_err(AppError::bad_request)
}

/// Emits and returns the boundary warning for an off-format national ID.
/// Malformed IDs are flagged, not rejected; the core only requires
/// uniqueness and non-emptiness.
fn format_warning(national_id: &NationalId) -> Option<String> {
    if national_id.matches_format() {
        None
    } else {
        warn!(national_id = %national_id, "national id does not match DD.DD.DD-DDD.DD");
        Some(format!(
            "national id {national_id} does not match the expected DD.DD.DD-DDD.DD layout"
        ))
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be parsed into domain types
    BadRequest { message: String },

    /// A booking service rejected the operation
    Booking(BookingError),

    /// Unexpected failure outside the booking core (e.g. export I/O)
    Internal { message: String },
}

impl AppError {
    fn bad_request(e: impl std::fmt::Display) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        AppError::Booking(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Booking(e) => {
                let status = match e {
                    BookingError::Validation(_) => StatusCode::BAD_REQUEST,
                    BookingError::NotFound { .. } => StatusCode::NOT_FOUND,
                    BookingError::InvalidTrain(_)
                    | BookingError::InvalidPersonnel(_)
                    | BookingError::Oversell(_) => StatusCode::CONFLICT,
                };
                (status, e.to_string())
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{
        JourneyService, PassengerService, PersonnelService, TicketService, TrainService,
    };
    use crate::store::{JourneyStore, PassengerStore, PersonnelStore, TicketStore, TrainStore};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(
            PassengerService::new(Arc::new(PassengerStore::new())),
            PersonnelService::new(Arc::new(PersonnelStore::new())),
            TrainService::new(Arc::new(TrainStore::new())),
            JourneyService::new(Arc::new(JourneyStore::new())),
            TicketService::new(Arc::new(TicketStore::new())),
            std::env::temp_dir(),
        )
    }

    fn register_request(national_id: &str) -> RegisterPassengerRequest {
        RegisterPassengerRequest {
            first_name: "Anna".into(),
            last_name: "Smith".into(),
            national_id: national_id.into(),
            birth_date: "1990-01-15".into(),
        }
    }

    #[test]
    fn booking_errors_map_to_statuses() {
        let cases = [
            (
                BookingError::validation("first name cannot be blank"),
                StatusCode::BAD_REQUEST,
            ),
            (
                BookingError::not_found("journey", "7d1e"),
                StatusCode::NOT_FOUND,
            ),
            (
                BookingError::InvalidTrain("at the wagon limit".into()),
                StatusCode::CONFLICT,
            ),
            (
                BookingError::InvalidPersonnel("crew too small".into()),
                StatusCode::CONFLICT,
            ),
            (
                BookingError::Oversell("no seats left".into()),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn parse_failures_are_bad_requests() {
        let response = AppError::bad_request("invalid seat class").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn format_warning_flags_off_layout_ids() {
        let canonical = NationalId::parse("90.01.15-123.45").unwrap();
        assert!(format_warning(&canonical).is_none());

        let loose = NationalId::parse("900115-12345").unwrap();
        let warning = format_warning(&loose).unwrap();
        assert!(warning.contains("900115-12345"));
    }

    #[tokio::test]
    async fn error_responses_carry_a_json_body() {
        let response =
            AppError::from(BookingError::Oversell("no first class seats left".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "oversell: no first class seats left");
    }

    #[tokio::test]
    async fn register_warns_only_for_stored_records() {
        let state = state();

        // Stored with an off-layout ID: flagged, not rejected
        let Json(response) =
            register_passenger(State(state.clone()), Json(register_request("900115-12345")))
                .await
                .unwrap();
        assert!(response.warning.is_some());

        // The duplicate is rejected outright; no warning belongs to it
        let err =
            register_passenger(State(state), Json(register_request("900115-12345")))
                .await
                .unwrap_err();
        assert!(matches!(
            err,
            AppError::Booking(BookingError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn register_response_omits_warning_for_canonical_ids() {
        let state = state();

        let Json(response) =
            register_passenger(State(state), Json(register_request("90.01.15-123.45")))
                .await
                .unwrap();
        assert!(response.warning.is_none());

        // The warning field disappears from the body entirely
        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("warning").is_none());
        assert_eq!(body["national_id"], "90.01.15-123.45");
    }

    #[tokio::test]
    async fn sell_rejects_unparseable_bodies() {
        let state = state();
        let id = JourneyId::new().to_string();

        let err = sell_ticket(
            State(state),
            Path(id),
            Bytes::from_static(b"not json"),
        )
        .await
        .unwrap_err();

        match err {
            AppError::BadRequest { message } => assert!(message.starts_with("invalid JSON")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
