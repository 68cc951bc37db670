use clap::Parser;
use std::io;
use std::path::Path;
use actix_web::web;

mod api;
mod cli;
mod core;
mod generators;
mod models;
mod strength;
mod ui;
mod utils;

use crate::api::AppState;
use crate::cli::{Args, CliCommand};
use crate::core::config::{parse_log_level, Config};

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .init();
}

#[actix_web::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(level) = args.log_level.as_deref() {
        match parse_log_level(level) {
            Some(filter) => config.log_level = filter,
            None => eprintln!("Unknown log level '{}', using {}", level, config.log_level),
        }
    }

    init_logging(&config);
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    let command = args.command.unwrap_or(CliCommand::Serve { address: None, port: None });

    match command {
        CliCommand::Serve { address, port } => {
            if let Some(address) = address {
                config.web_address = address;
            }
            if let Some(port) = port {
                config.web_port = port;
            }

            log::info!("🔐 Starting password tool");
            let state = web::Data::new(AppState::new(config));
            api::start_server(state).await.map_err(|e| {
                log::error!("Web server failed: {}", e);
                e
            })?;
            log::info!("✅ Shutdown complete");
        }
        CliCommand::Check { password } => {
            cli::handlers::handle_check(password).map_err(to_io_error)?;
        }
        CliCommand::Generate { length, numbers, specials, count } => {
            cli::handlers::handle_generate(&config, length, numbers, specials, count)
                .map_err(to_io_error)?;
        }
    }

    Ok(())
}

fn to_io_error(e: anyhow::Error) -> io::Error {
    log::error!("{:#}", e);
    io::Error::new(io::ErrorKind::Other, e.to_string())
}
