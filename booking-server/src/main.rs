use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use booking_server::booking::{
    JourneyService, PassengerService, PersonnelService, TicketService, TrainService,
};
use booking_server::seed;
use booking_server::store::{
    JourneyStore, PassengerStore, PersonnelStore, TicketStore, TrainStore,
};
use booking_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_server=info".into()),
        )
        .init();

    // Configuration from environment
    let addr: SocketAddr = std::env::var("BOOKING_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("BOOKING_ADDR must be a socket address like 127.0.0.1:3000");
    let export_dir = PathBuf::from(
        std::env::var("BOOKING_EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
    );

    // One store per entity type, created here and injected into the
    // services; nothing else ever holds the maps
    let passengers = PassengerService::new(Arc::new(PassengerStore::new()));
    let personnel = PersonnelService::new(Arc::new(PersonnelStore::new()));
    let trains = TrainService::new(Arc::new(TrainStore::new()));
    let journeys = JourneyService::new(Arc::new(JourneyStore::new()));
    let tickets = TicketService::new(Arc::new(TicketStore::new()));

    if std::env::var("BOOKING_SEED").is_ok_and(|v| v == "1") {
        seed::demo_crew(&personnel);
    }

    let state = AppState::new(passengers, personnel, trains, journeys, tickets, export_dir);
    let app = create_router(state);

    info!(%addr, "rail booking server listening");
    println!("Rail booking server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                            - Health check");
    println!("  POST /passengers                        - Register passenger");
    println!("  POST /personnel                         - Register crew member");
    println!("  POST /trains                            - Create train");
    println!("  POST /trains/{{id}}/wagons                - Attach wagon");
    println!("  POST /journeys                          - Schedule journey");
    println!("  POST /journeys/{{id}}/train               - Assign train");
    println!("  POST /journeys/{{id}}/personnel           - Assign crew member");
    println!("  GET  /journeys/{{id}}/operability         - Operability check");
    println!("  POST /journeys/{{id}}/tickets             - Sell ticket");
    println!("  GET  /journeys/{{id}}/availability        - Seats left per class");
    println!("  POST /journeys/{{id}}/boarding-list       - Export boarding list");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
