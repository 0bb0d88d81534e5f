use std::net::SocketAddr;
use std::sync::Arc;
use chrono::Utc;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use schedule_cell::services::{mock_schedule, AppointmentDirectory, InMemoryAppointmentDirectory};
use schedule_cell::ScheduleState;
use shared_config::AppConfig;
use telemedicine_cell::TelemedicineState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic portal API server");

    // Load configuration
    let config = Arc::new(AppConfig::from_env());

    // Appointment source for the provider schedule
    let directory: Arc<dyn AppointmentDirectory> = if config.seed_mock_schedule {
        let offset = config.clinic_offset();
        let today = Utc::now().with_timezone(&offset).date_naive();
        let appointments = mock_schedule(today, offset)?;
        info!("Seeding {} demonstration appointments for {}", appointments.len(), today);
        Arc::new(InMemoryAppointmentDirectory::new(
            config.schedule_provider_id.clone(),
            appointments,
        )?)
    } else {
        warn!("SEED_MOCK_SCHEDULE disabled, provider schedule starts empty");
        Arc::new(InMemoryAppointmentDirectory::empty(config.schedule_provider_id.clone()))
    };

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Create shared state
    let schedule_state = Arc::new(ScheduleState::new(config.clone(), directory));
    let telemedicine_state = Arc::new(TelemedicineState::new(config.clone()));

    // Build the application router
    let app = router::create_router(schedule_state, telemedicine_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
