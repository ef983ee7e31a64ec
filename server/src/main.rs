#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let leptos_options = match routes::leptos_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "invalid site configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(site_root = %leptos_options.site_root, "leptos options loaded");

    let app = routes::app(leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "photofeed listening");
    axum::serve(listener, app).await.expect("server failed");
}
