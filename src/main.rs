//! AskAneeq server binary.
//!
//! Bootstraps configuration, tracing, the analytics store, and the HTTP
//! router, then serves until ctrl-c or SIGTERM. The store is closed exactly
//! once after the server drains.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use ask_aneeq::adapters::http::admin::AdminState;
use ask_aneeq::adapters::http::router::{build_router, RouterConfig, SERVICE_VERSION};
use ask_aneeq::adapters::http::rpc::RpcState;
use ask_aneeq::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig};
use ask_aneeq::adapters::sqlite::SqliteAnalyticsStore;
use ask_aneeq::config::AppConfig;
use ask_aneeq::domain::profile::ProfileRecord;
use ask_aneeq::domain::search::KeywordSearchEngine;
use ask_aneeq::ports::AnalyticsStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = Arc::new(SqliteAnalyticsStore::connect(&config.analytics.db_path).await?);
    let profile = Arc::new(ProfileRecord::bundled().clone());

    let rpc_state = RpcState {
        profile,
        search: Arc::new(KeywordSearchEngine::new()),
        store: store.clone(),
        booking_url: config.availability.booking_url.clone(),
    };

    let admin_state = AdminState {
        store: store.clone(),
        token: config.admin.token.clone(),
    };

    let router_config = RouterConfig {
        rate_limiter: Arc::new(InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: config.server.rate_limit_max_requests,
            window_secs: config.server.rate_limit_window_secs,
        })),
        cors_origins: if config.is_production() {
            config.server.cors_origins_list()
        } else {
            Vec::new()
        },
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
    };

    let app = build_router(rpc_state, admin_state, router_config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        version = SERVICE_VERSION,
        %addr,
        admin_enabled = config.admin.token.is_some(),
        "AskAneeq server listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // Exactly once, after the server has drained
    store.close().await;
    tracing::info!("analytics store closed, shutting down");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
