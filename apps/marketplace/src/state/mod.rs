//! # State Module
//!
//! Everything the app builds once at startup and hands to commands and
//! screens. Nothing here is a module global: `AppState` is constructed from
//! an [`AppConfig`] (or from explicit parts in tests) and cloned into
//! whoever needs it. Clones share the same stores.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                         AppConfig                                       │
//! │                             │ AppState::from_config                     │
//! │          ┌──────────────────┼──────────────────┬──────────────────┐    │
//! │          ▼                  ▼                  ▼                  ▼     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ Marketplace  │  │ SessionState │  │  AuthState   │  │  UiConfig  │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │ jobs         │  │ "has entered"│  │ AuthService  │  │ submit     │  │
//! │  │ barbers      │  │ flag over    │  │ over the     │  │ delays     │  │
//! │  │ shops        │  │ optional     │  │ identity     │  │            │  │
//! │  │ user         │  │ storage      │  │ provider     │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  Commands take only the parts they need.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod session;

pub use auth::AuthState;
pub use session::SessionState;

use barberhub_store::Marketplace;
use tracing::info;

use crate::config::{AppConfig, UiConfig};
use crate::error::AppResult;

/// Handles to every piece of app state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub market: Marketplace,
    pub session: SessionState,
    pub auth: AuthState,
    pub ui: UiConfig,
}

impl AppState {
    /// Builds state as described by `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let market = if config.seed_demo_data {
            Marketplace::seeded()
        } else {
            Marketplace::default()
        };
        let session = SessionState::from_config(config)?;
        let auth = AuthState::new(config.auth.clone());

        info!(
            seeded = config.seed_demo_data,
            session_storage = session.inner().has_storage(),
            "app state initialized"
        );

        Ok(AppState {
            market,
            session,
            auth,
            ui: config.ui.clone(),
        })
    }

    /// Assembles state from parts built elsewhere.
    pub fn with_parts(market: Marketplace, session: SessionState, auth: AuthState, ui: UiConfig) -> Self {
        AppState {
            market,
            session,
            auth,
            ui,
        }
    }
}
