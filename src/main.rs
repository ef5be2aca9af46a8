mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let port = config.port;
    tracing::info!(api_base_url = %config.api_base_url, site_url = %config.site_url, "configuration loaded");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "cadenza-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
