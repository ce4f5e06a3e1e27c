use journey_server::config::ServerConfig;
use journey_server::locations::LocationNames;
use journey_server::planner::SearchConfig;
use journey_server::schedule::SharedSchedule;
use journey_server::service::JourneyService;
use journey_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Journey planner failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Fail fast on a bad timetable unless asked to defer
    let schedule = if config.lazy_schedule {
        info!(path = %config.schedule_path.display(), "Schedule will load on first query");
        SharedSchedule::lazy(&config.schedule_path)
    } else {
        SharedSchedule::load(&config.schedule_path)?
    };

    let names = match &config.locations_path {
        Some(path) => {
            let names = LocationNames::load(path)?;
            info!(path = %path.display(), count = names.len(), "Loaded location names");
            names
        }
        None => LocationNames::builtin(),
    };

    let service = JourneyService::new(schedule, names, SearchConfig::default());
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Journey planner listening");
    info!("POST /api/cities/findFastestRoute, POST /api/cities/findCheapestRoute, GET /health");

    axum::serve(listener, app).await?;
    Ok(())
}
