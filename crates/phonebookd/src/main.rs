// # phonebookd - Phonebook Daemon
//
// Thin integration layer for the phonebook GraphQL service. The daemon is
// responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Seeding the contact store and wiring the directory client
// 4. Serving the GraphQL API over HTTP
//
// All resolver and store logic lives in phonebook-core / phonebook-graphql;
// nothing here should grow business logic.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `PHONEBOOK_BIND_ADDR`: Socket address to listen on
//   (default `127.0.0.1:4000`; use port 0 for an ephemeral port)
// - `PHONEBOOK_DIRECTORY_URL`: Base URL of the remote directory serving
//   `/persons` (default `http://localhost:3000`)
// - `PHONEBOOK_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//
// ## Example
//
// ```bash
// export PHONEBOOK_BIND_ADDR=127.0.0.1:4000
// export PHONEBOOK_DIRECTORY_URL=http://localhost:3000
//
// phonebookd
// ```

mod server;

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use phonebook_core::ServiceConfig;
use phonebook_core::config::{DEFAULT_BIND_ADDR, DEFAULT_DIRECTORY_URL};

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum PhonebookExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<PhonebookExitCode> for ExitCode {
    fn from(code: PhonebookExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Load configuration from environment variables
fn config_from_env() -> ServiceConfig {
    ServiceConfig {
        bind_addr: env::var("PHONEBOOK_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        directory_url: env::var("PHONEBOOK_DIRECTORY_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string()),
        log_level: env::var("PHONEBOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    }
}

fn main() -> ExitCode {
    // Load and validate configuration from environment
    let config = config_from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return PhonebookExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return PhonebookExitCode::ConfigError.into();
    }

    info!("Starting phonebookd daemon");
    info!("Remote directory: {}", config.directory_url);

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return PhonebookExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_daemon(config).await {
            error!("Daemon error: {}", e);
            PhonebookExitCode::RuntimeError
        } else {
            PhonebookExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Run the daemon
async fn run_daemon(config: ServiceConfig) -> Result<()> {
    // validate() already checked the address parses
    let bind_addr = config
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", config.bind_addr, e))?;

    server::run(bind_addr, config.directory_url).await?;

    info!("Shutting down daemon");
    Ok(())
}
