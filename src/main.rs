//! Quiz host: server-renders the Leptos frontend so history-mode deep links
//! (`/jugar`, `/crear`, ...) load directly instead of 404ing.

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
    let config = HostConfig::from_env(conf.leptos_options.site_addr).inspect_err(|e| {
        tracing::error!(error = %e, "invalid host configuration");
    })?;

    let app = routes::app(conf.leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "quiz host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
