mod config;
mod constants;
mod error;
mod handlers;
mod relay;
mod server;
mod upload;
mod vision;

use crate::config::Config;
use crate::server::AppState;
use log::info;
use std::error::Error;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let state = AppState::new(config)?;
    let listener = TcpListener::bind(state.config.bind_addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    server::serve(listener, state).await?;
    Ok(())
}
