use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hiring_portal::adapters::http::{portal_router, PortalAppState};
use hiring_portal::adapters::{JwtSessionValidator, RpcTierAuthority};
use hiring_portal::application::AccessEvaluator;
use hiring_portal::config::AppConfig;
use hiring_portal::ports::{SessionValidator, TierAuthority};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(config.server.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.server.log_json).then(tracing_subscriber::fmt::layer))
        .init();

    config.validate()?;
    info!(
        environment = %config.server.environment,
        "Starting Hiring Portal v{}",
        env!("CARGO_PKG_VERSION")
    );

    let validator: Arc<dyn SessionValidator> =
        Arc::new(JwtSessionValidator::new(config.auth.jwt_config()));
    let authority: Arc<dyn TierAuthority> =
        Arc::new(RpcTierAuthority::new(config.tier_authority.rpc_config())?);
    info!(
        base_url = %config.tier_authority.base_url,
        function = %config.tier_authority.rpc_function,
        "Tier authority client initialized"
    );

    let state = PortalAppState::new(
        Arc::new(AccessEvaluator::new(authority)),
        config.routes.destinations(),
    );
    let app = portal_router(state, validator).layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
