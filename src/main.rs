use dioxus_logger::tracing;
use pairing::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match startup::connect_to_database(&config).await {
        Ok(_) => tracing::info!(
            min_stage_participants = ?config.min_stage_participants,
            "Pairing database is up to date"
        ),
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    }
}
