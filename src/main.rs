use crate::api::HttpPropertyApi;
use crate::app::App;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod auth;
mod cache;
mod config;
mod db;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sterling_spaces=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Session database
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Property API client
    let api = match HttpPropertyApi::new(config.api_url.clone(), config.http_timeout) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("property API client init failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    let app = App::new(config, db, Box::new(api));

    match app.sessions.purge(chrono::Utc::now().timestamp()) {
        Ok(n) => tracing::info!(purged = n, "stale sessions removed"),
        Err(e) => tracing::warn!(error = %e, "session purge failed"),
    }

    // 4️⃣ Serve
    tracing::info!(%addr, api = %app.config.api_url, workers, "starting server");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
