//! Web server for the coursekit manager dashboard
#![forbid(unsafe_code)]

use coursekit_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = coursekit_core::Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        coursekit_core::Config::default()
    });

    let app = build_app(config.clone());

    let host: IpAddr = config.webserver.host.parse().map_err(|e| {
        format!(
            "Invalid web server host '{}': {}",
            config.webserver.host, e
        )
    })?;
    let addr = SocketAddr::new(host, config.webserver.port);

    info!("Starting coursekit dashboard on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
