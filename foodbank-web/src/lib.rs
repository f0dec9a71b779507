//! Foodbank Web - presentation server for the food bank inventory
//!
//! Forwards browser requests to the inventory API, filters listings and
//! answers with JSON view models or redirects.
//!
//! ```text
//! foodbank-web/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # login gate
//! ├── api/           # routes and handlers
//! ├── middleware/    # request logging
//! └── utils/         # logger, error re-exports
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod middleware;
pub mod utils;

pub use api::build_app;
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, then start logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // a missing .env is normal outside development
        eprintln!("No .env loaded: {}", e);
    }
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ______                __   __                __
   / ____/___  ____  ____/ /  / /_  ____ _____  / /__
  / /_  / __ \/ __ \/ __  /  / __ \/ __ `/ __ \/ //_/
 / __/ / /_/ / /_/ / /_/ /  / /_/ / /_/ / / / / ,<
/_/    \____/\____/\__,_/  /_.___/\__,_/_/ /_/_/|_|
    "#
    );
}
