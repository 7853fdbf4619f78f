//! # Identity Provider
//!
//! The async seam between the app and whoever vouches for a Google id token.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  AuthService                      IdentityProvider                      │
//! │      │                                   │                              │
//! │      │  exchange_credential(id_token)    │                              │
//! │      │──────────────────────────────────►│  verify, stamp metadata      │
//! │      │◄──────────────────────────────────│  AuthUser                    │
//! │      │                                   │                              │
//! │      │                                   │──► auth_state: Some(user)    │
//! │      │  sign_out()                       │                              │
//! │      │──────────────────────────────────►│──► auth_state: None          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

// =============================================================================
// Types
// =============================================================================

/// Sign-in timestamps kept by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    pub creation_time: Option<DateTime<Utc>>,
    pub last_sign_in_time: Option<DateTime<Utc>>,
}

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub metadata: UserMetadata,
}

/// Google credential built from a successful provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCredential {
    pub id_token: String,
    pub access_token: Option<String>,
}

/// Account details registered with [`LocalIdentityProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountProfile {
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

// =============================================================================
// Provider Trait
// =============================================================================

/// External identity provider.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Trades a Google credential for a signed-in user.
    async fn exchange_credential(&self, credential: GoogleCredential) -> AuthResult<AuthUser>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Receiver holding the current user; updated on every change.
    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>>;
}

// =============================================================================
// Local Provider
// =============================================================================

struct Account {
    uid: String,
    profile: AccountProfile,
    created_at: Option<DateTime<Utc>>,
    last_sign_in: Option<DateTime<Utc>>,
}

impl Account {
    fn to_user(&self) -> AuthUser {
        AuthUser {
            uid: self.uid.clone(),
            email: Some(self.profile.email.clone()),
            display_name: self.profile.display_name.clone(),
            photo_url: self.profile.photo_url.clone(),
            metadata: UserMetadata {
                creation_time: self.created_at,
                last_sign_in_time: self.last_sign_in,
            },
        }
    }
}

/// In-process provider that accepts id tokens registered up front.
///
/// The first sign-in stamps creation and last-sign-in with the same
/// instant; later sign-ins move last-sign-in strictly forward.
#[derive(Clone)]
pub struct LocalIdentityProvider {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
    state_tx: Arc<watch::Sender<Option<AuthUser>>>,
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        let (state_tx, _) = watch::channel(None);
        LocalIdentityProvider {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            state_tx: Arc::new(state_tx),
        }
    }
}

impl std::fmt::Debug for LocalIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalIdentityProvider")
            .field("accounts", &self.accounts.lock().len())
            .finish()
    }
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `id_token` for the given account. Returns the account uid.
    pub fn register(&self, id_token: impl Into<String>, profile: AccountProfile) -> String {
        let uid = Uuid::new_v4().to_string();
        self.accounts.lock().insert(
            id_token.into(),
            Account {
                uid: uid.clone(),
                profile,
                created_at: None,
                last_sign_in: None,
            },
        );
        uid
    }

    fn stamp(account: &mut Account, now: DateTime<Utc>) {
        match account.created_at {
            None => {
                account.created_at = Some(now);
                account.last_sign_in = Some(now);
            }
            Some(created) => {
                let floor = account.last_sign_in.unwrap_or(created) + Duration::milliseconds(1);
                account.last_sign_in = Some(now.max(floor));
            }
        }
    }
}

impl IdentityProvider for LocalIdentityProvider {
    async fn exchange_credential(&self, credential: GoogleCredential) -> AuthResult<AuthUser> {
        let user = {
            let mut accounts = self.accounts.lock();
            let account = accounts
                .get_mut(&credential.id_token)
                .ok_or(AuthError::InvalidCredential)?;
            Self::stamp(account, Utc::now());
            account.to_user()
        };
        debug!(uid = %user.uid, "credential exchanged");
        self.state_tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let previous = self.state_tx.send_replace(None);
        if let Some(user) = previous {
            info!(uid = %user.uid, "signed out");
        }
        Ok(())
    }

    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state_tx.subscribe()
    }
}
