//! # Auth State
//!
//! Sign-in service over the in-process identity provider. The mobile shell
//! swaps in the real provider by implementing `IdentityProvider`.

use barberhub_auth::{AuthService, LocalIdentityProvider, OAuthConfig};

/// Wrapper around `AuthService` for commands and screens.
#[derive(Debug, Clone)]
pub struct AuthState {
    service: AuthService<LocalIdentityProvider>,
}

impl AuthState {
    pub fn new(config: OAuthConfig) -> Self {
        AuthState {
            service: AuthService::new(LocalIdentityProvider::new(), config),
        }
    }

    pub fn inner(&self) -> &AuthService<LocalIdentityProvider> {
        &self.service
    }

    /// The provider, for registering accounts the picker may return.
    pub fn provider(&self) -> &LocalIdentityProvider {
        self.service.provider()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::new(OAuthConfig::default())
    }
}
