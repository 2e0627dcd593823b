use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use tokio::sync::broadcast;

use realty::{
    config::{self, Config},
    logger::setup_logger,
    web::{self, AppState},
};

fn spawn_signal_listener(shutdown_tx: broadcast::Sender<()>) -> Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            info!("Received signal {}, shutting down", signal);
            let _ = shutdown_tx.send(());
        }
    });
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());
    info!("Serving listings from {:?}", config.listing_feeds);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    spawn_signal_listener(shutdown_tx)?;

    let state = AppState::new(config);
    if let Err(err) = web::start_http_server(state, shutdown_rx).await {
        error!("Error: {:?}", err)
    }

    Ok(())
}
