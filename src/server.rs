use crate::config::Config;
use crate::constants::{ROUTE_IMAGE, ROUTE_ROOT, ROUTE_SEND_IMAGE};
use crate::handlers;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, post},
    Router,
};
use log::{error, info};
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.relay_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(AppState {
            config: Arc::new(config),
            client: builder.build()?,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = match state.config.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route(ROUTE_ROOT, any(handlers::root))
        .route(ROUTE_IMAGE, post(handlers::upload_image))
        .route(ROUTE_SEND_IMAGE, any(handlers::send_image))
        .layer(body_limit)
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!("failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
