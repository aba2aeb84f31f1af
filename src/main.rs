use std::net::TcpListener;

use team_allocator::run;
use team_allocator::config::settings::get_config;
use team_allocator::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "team-allocator".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    tracing::info!(
        "Allocation limits: min {} / ideal {} / max {} players per team, {} coach pairings",
        config.allocation.min_team_size,
        config.allocation.ideal_team_size,
        config.allocation.max_team_size,
        config.allocation.coach_pairings.len()
    );

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, config.allocation)?.await
}
