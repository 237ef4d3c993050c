//! Salary calculator server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use salary_calculator::adapters::http::{app_router, HttpSettings, RateLimitState, SalaryAppState};
use salary_calculator::adapters::{ClientLimiterRegistry, HttpExchangeRateProvider};
use salary_calculator::application::CalculateSalaryHandler;
use salary_calculator::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let registry = Arc::new(ClientLimiterRegistry::new(config.rate_limit.registry_config()));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = {
        let registry = registry.clone();
        tokio::spawn(async move { registry.run_sweeper(shutdown_rx).await })
    };

    let rates = Arc::new(HttpExchangeRateProvider::new((&config.exchange_rate).into())?);
    let handler = CalculateSalaryHandler::new(rates, config.taxes.withholding_table());

    let rate_limit = RateLimitState::new(registry)
        .with_identity(config.rate_limit.identity)
        .with_forwarded_headers(config.rate_limit.trust_forwarded_headers);
    let app = app_router(
        SalaryAppState::new(Arc::new(handler)),
        rate_limit,
        &HttpSettings::from(&config.server),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        refill_per_second = config.rate_limit.refill_per_second,
        burst = config.rate_limit.burst,
        "Salary calculator listening"
    );

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    sweeper.await?;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
