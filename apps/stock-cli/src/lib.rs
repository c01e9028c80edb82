//! # Stockroom CLI Library
//!
//! Interactive front end for the product store.
//!
//! ## Module Organization
//! ```text
//! stock_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment-driven configuration
//! ├── controller.rs   ◄─── MenuController: the interactive loop
//! ├── menu.rs         ◄─── MenuCommand / UpdateCommand enums
//! ├── render.rs       ◄─── Menus and product table
//! └── error.rs        ◄─── AppError for menu flows
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod render;

use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use controller::MenuController;
use error::AppResult;
use stock_db::Database;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOCK_DB_PATH, STOCK_MAX_CONNECTIONS, STOCK_CURRENCY_SYMBOL       │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • Create the file if missing, ensure the `produtos` table           │
/// │                                                                         │
/// │  4. Run the Menu ─────────────────────────────────────────────────────► │
/// │     • stdin / stdout until option 5 or end of input                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    init_tracing();

    let config = AppConfig::load()?;
    info!(path = %config.database_path.display(), "Starting Stockroom");

    let db = Database::new(config.db_config()).await?;

    let stdin = io::stdin();
    let mut controller = MenuController::new(db.products(), stdin.lock(), io::stdout())
        .currency_symbol(config.currency_symbol.clone());

    let outcome = controller.run().await;
    db.close().await;
    outcome
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stock_db=debug` - Show every store statement
/// - Default: WARN, so the menu stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
