//! GeoTrip HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{TripService, ports::CachePort, ports::RoutingPort};
use infrastructure::{
    AppConfig, CacheBackend, GoogleRoutingAdapter, MokaCache, MokaCacheConfig,
    OsrmRoutingAdapter, RedisCache,
};
use integration_google::GoogleDirectionsClient;
use integration_osrm::{NominatimGeocodingClient, OsrmRouteClient};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can come from it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_format);

    info!("GeoTrip v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        cache_backend = ?config.cache.backend,
        race_deadline_secs = config.lookup.race_deadline_secs,
        "Configuration loaded"
    );

    // Select the cache backend
    let cache: Arc<dyn CachePort> = match config.cache.backend {
        CacheBackend::Memory => Arc::new(MokaCache::with_config(MokaCacheConfig {
            max_capacity_mb: config.cache.max_capacity_mb,
        })),
        CacheBackend::Redis => Arc::new(
            RedisCache::new(&config.cache.redis_url)
                .map_err(|e| anyhow::anyhow!("Failed to initialize Redis cache: {e}"))?,
        ),
    };

    // Initialize provider adapters
    let google_client = GoogleDirectionsClient::new(&config.google)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Google client: {e}"))?;
    let osrm_client = OsrmRouteClient::new(&config.osrm)
        .map_err(|e| anyhow::anyhow!("Failed to initialize OSRM client: {e}"))?;
    let geocoding_client = NominatimGeocodingClient::new(&config.osrm)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Nominatim client: {e}"))?;

    let providers: Vec<Arc<dyn RoutingPort>> = vec![
        Arc::new(GoogleRoutingAdapter::new(google_client)),
        Arc::new(OsrmRoutingAdapter::new(osrm_client, geocoding_client)),
    ];

    // Initialize the trip service
    let trip_service = TripService::new(cache, providers)
        .map_err(|e| anyhow::anyhow!("Failed to initialize trip service: {e}"))?
        .with_race_deadline(config.lookup.race_deadline());

    let state = AppState {
        trip_service: Arc::new(trip_service),
    };

    // Build router
    let app = routes::create_router(state);

    // Add middleware (order matters: first added = outermost)
    let app = if config.server.cors_enabled {
        app.layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app.layer(TraceLayer::new_for_http())
    };

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Install the tracing subscriber, formatting per `server.log_format`
fn init_tracing(log_format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "geotrip_server=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
