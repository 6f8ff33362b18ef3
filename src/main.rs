// Entry point: parse config, install logging, launch Rocket.
use clap::Parser;
use tracing::{error, info};

use challenge_site::common::logging::{self, events};
use challenge_site::AppConfig;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::init(config.log_format)?;

    info!(
        event = events::APP_START,
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        locale = %config.locale,
        msg = "Starting"
    );

    let rocket = challenge_site::build(&config)?;
    if let Err(e) = rocket.launch().await {
        // kind() marks the error as handled so Rocket doesn't panic on drop
        let kind = format!("{:?}", e.kind());
        error!(event = events::APP_SHUTDOWN, error = %e, kind = %kind, msg = "Launch failed");
        anyhow::bail!("rocket launch failed: {e}");
    }
    Ok(())
}
