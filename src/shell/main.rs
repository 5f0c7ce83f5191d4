use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use time_clock::modules::scheduling::adapters::outbound::scheduling_in_memory::InMemoryScheduling;
use time_clock::modules::time_clock::adapters::outbound::projections_in_memory::InMemoryProjections;
use time_clock::modules::time_clock::adapters::outbound::projector::Projector;
use time_clock::modules::time_clock::core::events::TimeClockEvent;
use time_clock::modules::time_clock::ports::TimeClockPorts;
use time_clock::shared::core::primitives::{Clock, SystemClock};
use time_clock::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use time_clock::shared::infrastructure::notifications::in_memory::InMemoryNotificationSink;
use time_clock::shell::actor::{ORG_ID_HEADER, USER_ID_HEADER, USER_ROLE_HEADER};
use time_clock::shell::config::AppConfig;
use time_clock::shell::graphql::{self, build_schema};
use time_clock::shell::http;
use time_clock::shell::seed::seed_demo_data;
use time_clock::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let clock = Arc::new(SystemClock);

    // In-memory deps for now
    let mut scheduling = InMemoryScheduling::new();
    if config.seed_demo_data {
        seed_demo_data(&mut scheduling, clock.now())?;
    }
    let scheduling = Arc::new(scheduling);
    let event_store = Arc::new(InMemoryEventStore::<TimeClockEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Arc::new(Projector::new(
        "time_entries",
        projections.clone(),
        projections.clone(),
    ));

    let ports = TimeClockPorts {
        event_store,
        projector,
        queries: projections,
        organizations: scheduling.clone(),
        shifts: scheduling.clone(),
        weeks: scheduling.clone(),
        directory: scheduling,
        notifications: Arc::new(InMemoryNotificationSink::new()),
        clock,
    };
    let state = AppState::new(ports);

    let app = http::router(state.clone())
        .merge(graphql::router(build_schema(state)))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    tracing::info!("REST endpoint: http://{}/api/v1", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%origin, %error, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(ORG_ID_HEADER),
            header::HeaderName::from_static(USER_ID_HEADER),
            header::HeaderName::from_static(USER_ROLE_HEADER),
        ])
        .allow_credentials(true)
}
