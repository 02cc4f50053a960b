use tracing::Level;
use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}
