//! Loads trademark records from a JSON array into the database.
//!
//! Usage: `load_data [PATH]`. Without `PATH` the `data_file` setting is used.
//! The stored registry is replaced in a single transaction; if that commit
//! fails nothing changes.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use dotenvy::dotenv;

use trademark_search::db::{establish_connection_pool, run_migrations};
use trademark_search::ingest::load_trademarks_from_path;
use trademark_search::models::config::ServerConfig;
use trademark_search::repository::{DieselRepository, TrademarkWriter};

fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            return ExitCode::FAILURE;
        }
    };

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&server_config.data_file));

    let report = match load_trademarks_from_path(&path) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Cannot load {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    if report.loaded() == 0 {
        log::error!(
            "No valid items in {} ({} skipped); database left unchanged",
            path.display(),
            report.skipped
        );
        return ExitCode::FAILURE;
    }

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to initialize database: {err}");
        return ExitCode::FAILURE;
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "Committing {} item(s), {} skipped",
        report.loaded(),
        report.skipped
    );
    match repo.replace_trademarks(&report.trademarks) {
        Ok(count) => {
            log::info!("Data load complete: {count} item(s) stored");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Commit failed, batch discarded: {err}");
            ExitCode::FAILURE
        }
    }
}
