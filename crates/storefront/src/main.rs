//! QA Playground Storefront - demo shop for UI-testing practice.
//!
//! This binary serves the playground on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, one page with a section per route
//! - Askama templates for server-side rendering
//! - Local key-value store (JSON file or memory) for users, session and cart
//! - Chaos mode injecting random failures into login, cart, coupon,
//!   checkout and feedback

#![cfg_attr(not(test), forbid(unsafe_code))]

use qa_playground_storefront::chaos::{Chaos, SeededSource};
use qa_playground_storefront::config::PlaygroundConfig;
use qa_playground_storefront::store::{FileStore, Store};
use qa_playground_storefront::{AppState, Playground, routes};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &PlaygroundConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Build the store the configuration asks for.
fn open_store(config: &PlaygroundConfig) -> Store {
    match &config.store_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using file store");
            Store::new(FileStore::new(path.clone()))
        }
        None => {
            tracing::info!("Using in-memory store; data is lost on restart");
            Store::in_memory()
        }
    }
}

/// Build the chaos injector, seeded when the configuration fixes a seed.
fn build_chaos(config: &PlaygroundConfig) -> Chaos {
    config.chaos_seed.map_or_else(Chaos::default, |seed| {
        tracing::info!(seed, "Chaos source seeded");
        Chaos::new(SeededSource::new(seed))
    })
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = PlaygroundConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "qa_playground_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let playground = Playground::new(open_store(&config), build_chaos(&config));
    let state = AppState::new(config.clone(), playground);

    // Build router
    let app = routes::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("playground listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
