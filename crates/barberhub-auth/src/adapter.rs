//! # Sign-In Adapter
//!
//! Turns configuration and provider responses into calls on an
//! [`IdentityProvider`].
//!
//! ```text
//!   OAuthConfig ──► SignInRequestBuilder(platform) ──► SignInRequest
//!                                                        │ (shown by the OS)
//!                                                        ▼
//!   ProviderResponse ──► AuthService::complete_sign_in ──► AuthUser
//!                        (MissingIdToken if no id token)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::{GoogleClientIds, OAuthConfig};
use crate::error::{AuthError, AuthResult};
use crate::provider::{AuthUser, GoogleCredential, IdentityProvider};

/// Scopes requested unless the caller overrides them.
pub const DEFAULT_SCOPES: [&str; 3] = ["openid", "profile", "email"];

// =============================================================================
// Platform
// =============================================================================

/// Platform the sign-in is started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Expo,
    Ios,
    Android,
    Web,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Platform::Expo, Platform::Ios, Platform::Android, Platform::Web];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Expo => "expo",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AuthError::Provider(format!("unknown platform: {}", s)))
    }
}

// =============================================================================
// Sign-In Request
// =============================================================================

/// Parameters for the provider's account picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub platform: Platform,
    pub client_id: String,
    pub select_account: bool,
    pub scopes: Vec<String>,
}

/// Builder for [`SignInRequest`].
///
/// ## Example
/// ```rust
/// use barberhub_auth::{OAuthConfig, Platform, SignInRequestBuilder};
///
/// let mut config = OAuthConfig::default();
/// config.google.web_client_id = Some("web-id".into());
///
/// let request = SignInRequestBuilder::new(&config.google, Platform::Web)
///     .build()
///     .unwrap();
/// assert!(request.select_account);
/// assert_eq!(request.scopes, ["openid", "profile", "email"]);
///
/// assert!(SignInRequestBuilder::new(&config.google, Platform::Ios).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SignInRequestBuilder {
    platform: Platform,
    client_id: Option<String>,
    select_account: bool,
    scopes: Vec<String>,
}

impl SignInRequestBuilder {
    pub fn new(client_ids: &GoogleClientIds, platform: Platform) -> Self {
        SignInRequestBuilder {
            platform,
            client_id: client_ids.for_platform(platform).map(str::to_string),
            select_account: true,
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether the account chooser is forced even with one account.
    pub fn select_account(mut self, select: bool) -> Self {
        self.select_account = select;
        self
    }

    /// Replaces the requested scopes.
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> AuthResult<SignInRequest> {
        let client_id = self.client_id.ok_or_else(|| AuthError::MissingClientId {
            platform: self.platform.to_string(),
        })?;
        Ok(SignInRequest {
            platform: self.platform,
            client_id,
            select_account: self.select_account,
            scopes: self.scopes,
        })
    }
}

// =============================================================================
// Provider Response
// =============================================================================

/// Outcome reported by the account picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    #[default]
    Success,
    Cancel,
    Dismiss,
    Error,
}

/// Tokens returned on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
}

/// What the account picker hands back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub authentication: Option<Authentication>,
}

impl ProviderResponse {
    /// A successful response carrying `id_token`.
    pub fn success(id_token: impl Into<String>) -> Self {
        ProviderResponse {
            kind: ResponseKind::Success,
            authentication: Some(Authentication {
                id_token: Some(id_token.into()),
                access_token: None,
            }),
        }
    }

    fn credential(&self) -> AuthResult<GoogleCredential> {
        let auth = self.authentication.as_ref();
        let id_token = auth
            .and_then(|a| a.id_token.as_deref())
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingIdToken)?;
        Ok(GoogleCredential {
            id_token: id_token.to_string(),
            access_token: auth.and_then(|a| a.access_token.clone()),
        })
    }
}

// =============================================================================
// Auth Service
// =============================================================================

/// App-facing sign-in surface over an [`IdentityProvider`].
#[derive(Debug, Clone)]
pub struct AuthService<P> {
    provider: P,
    config: OAuthConfig,
}

impl<P: IdentityProvider> AuthService<P> {
    pub fn new(provider: P, config: OAuthConfig) -> Self {
        AuthService { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Request builder prefilled with the configured client id.
    pub fn request_builder(&self, platform: Platform) -> SignInRequestBuilder {
        SignInRequestBuilder::new(&self.config.google, platform)
    }

    /// Completes sign-in from the picker's response.
    pub async fn complete_sign_in(&self, response: &ProviderResponse) -> AuthResult<AuthUser> {
        debug!(kind = ?response.kind, "completing sign-in");
        let credential = response.credential()?;
        let user = self.provider.exchange_credential(credential).await?;
        info!(uid = %user.uid, first_session = is_first_session(Some(&user)), "signed in");
        Ok(user)
    }

    /// Auth-state receiver: the current user or `None`.
    pub fn on_auth(&self) -> watch::Receiver<Option<AuthUser>> {
        self.provider.auth_state()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.provider.auth_state().borrow().clone()
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        self.provider.sign_out().await
    }
}

/// True for a user whose creation and last sign-in times are present and equal.
pub fn is_first_session(user: Option<&AuthUser>) -> bool {
    let Some(user) = user else {
        return false;
    };
    match (user.metadata.creation_time, user.metadata.last_sign_in_time) {
        (Some(created), Some(last)) => created == last,
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
