//! # BarberHub Marketplace
//!
//! Application layer of the BarberHub marketplace: configuration, state
//! wiring, the commands screens call, and one view model per screen.
//!
//! ## Module Organization
//! ```text
//! barberhub_marketplace/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig: defaults → TOML → env
//! ├── error.rs        ◄─── AppError and the Alert shown for it
//! ├── routes.rs       ◄─── Named destinations
//! ├── media.rs        ◄─── Photo picker boundary and budgets
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (stores, session, auth, ui)
//! │   ├── session.rs  ◄─── Session flag over configured storage
//! │   └── auth.rs     ◄─── Sign-in service
//! ├── commands/       ◄─── post_job, list_shop, add_barber, profile, ...
//! └── screens/        ◄─── home, jobs, barbers, shops, detail, profile
//! ```
//!
//! ## Example
//! ```rust
//! use barberhub_marketplace::config::{AppConfig, SessionBackendKind};
//! use barberhub_marketplace::screens::JobsScreen;
//! use barberhub_marketplace::state::AppState;
//!
//! let mut config = AppConfig::default();
//! config.session.backend = SessionBackendKind::Memory;
//! let state = AppState::from_config(&config).unwrap();
//!
//! let jobs = JobsScreen::mount(&state.market, false);
//! assert_eq!(jobs.visible().len(), 2);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod routes;
pub mod screens;
pub mod state;

use std::path::PathBuf;

use barberhub_core::forms::JobForm;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppResult;
use routes::Route;
use screens::{HomeScreen, JobsScreen, ProfileScreen};
use state::AppState;

/// Runs the marketplace.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: barberhub=info, override with RUST_LOG                   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • explicit path, or marketplace.toml in the config dir              │
/// │     • BARBERHUB_* environment overrides                                 │
/// │                                                                         │
/// │  3. Build AppState ───────────────────────────────────────────────────► │
/// │     • Stores (seeded unless disabled)                                   │
/// │     • Session flag over the configured storage                          │
/// │     • Auth service                                                      │
/// │                                                                         │
/// │  4. Run the session on a tokio runtime ───────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config_path: Option<PathBuf>) -> AppResult<()> {
    init_tracing();

    info!("Starting BarberHub marketplace");

    let config = AppConfig::load_or_default(config_path);
    let state = AppState::from_config(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(demo_session(&state))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=barberhub_store=debug` - Store mutations only
/// - Default: `barberhub=info`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,barberhub=info"));

    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Walks a first-time user through entering, browsing and posting.
async fn demo_session(state: &AppState) -> AppResult<()> {
    if commands::session::initial_route(&state.session).await == Route::Welcome {
        commands::session::enter(&state.session).await;
        info!("welcome screen passed");
    }

    let home = HomeScreen::mount(&state.market);
    info!(greeting = %home.greeting(), featured = ?home.featured_job(), "home");

    let jobs = JobsScreen::mount(&state.market, false);
    info!(visible = jobs.visible().len(), "jobs screen mounted");

    let form = JobForm {
        shop_name: "Test Cuts".into(),
        location: "London, Soho".into(),
        salary_text: "£12/hour".into(),
        phone: "+447000000000".into(),
        ..JobForm::default()
    };
    let alert = commands::jobs::post_job(&state.market, &state.ui, &form, None).await?;
    info!(title = %alert.title, message = %alert.message, "job posted");
    info!(visible = jobs.visible().len(), "jobs screen re-derived");

    let profile = ProfileScreen::mount(&state.market);
    info!(
        jobs = %profile.tab_label(barberhub_core::views::MyListingsTab::Jobs),
        "my listings"
    );

    Ok(())
}
