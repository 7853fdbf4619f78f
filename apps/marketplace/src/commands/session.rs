//! # Session Commands
//!
//! The welcome screen: skip it for returning users, remember first entry,
//! and complete Google sign-in.
//!
//! ```text
//!   launch ──► initial_route ──has_entered──► Home
//!                   │ first time
//!                   ▼
//!               Welcome ──enter / sign_in──► mark_entered ──► Home
//! ```

use barberhub_auth::{AuthUser, Platform, ProviderResponse, SignInRequest};
use barberhub_core::UserPatch;
use barberhub_store::Marketplace;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::routes::Route;
use crate::state::{AuthState, SessionState};

/// Where the app opens.
pub async fn initial_route(session: &SessionState) -> Route {
    if session.inner().has_entered().await {
        debug!("returning user; skipping welcome");
        Route::Home
    } else {
        Route::Welcome
    }
}

/// "Continue" on the welcome screen.
pub async fn enter(session: &SessionState) -> Route {
    session.inner().mark_entered().await;
    Route::Home
}

/// Account picker parameters for `platform`.
pub fn sign_in_request(auth: &AuthState, platform: Platform) -> AppResult<SignInRequest> {
    Ok(auth.inner().request_builder(platform).build()?)
}

/// Completes Google sign-in from the picker's response.
///
/// The account's email, name and photo are copied onto the user profile so
/// new listings are owned by the signed-in account.
pub async fn sign_in(
    auth: &AuthState,
    session: &SessionState,
    market: &Marketplace,
    response: &ProviderResponse,
) -> AppResult<AuthUser> {
    let user = auth.inner().complete_sign_in(response).await?;

    market.user.update(UserPatch {
        name: user.display_name.clone(),
        email: user.email.clone(),
        photo: user
            .photo_url
            .as_deref()
            .map(|url| Some(barberhub_core::PhotoRef::new(url))),
        ..UserPatch::default()
    });
    session.inner().mark_entered().await;

    info!(uid = %user.uid, "sign-in complete");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use barberhub_auth::{AccountProfile, AuthError, OAuthConfig};

    #[tokio::test]
    async fn test_welcome_flow() {
        let session = SessionState::memory();
        assert_eq!(initial_route(&session).await, Route::Welcome);
        assert_eq!(enter(&session).await, Route::Home);
        assert_eq!(initial_route(&session).await, Route::Home);
    }

    #[tokio::test]
    async fn test_sign_in_updates_profile() {
        let auth = AuthState::default();
        let session = SessionState::memory();
        let market = Marketplace::seeded();
        auth.provider().register(
            "token-1",
            AccountProfile {
                email: "sam@barbers.co.uk".into(),
                display_name: Some("Sam Reid".into()),
                photo_url: None,
            },
        );

        let user = sign_in(&auth, &session, &market, &ProviderResponse::success("token-1"))
            .await
            .unwrap();

        assert_eq!(user.email.as_deref(), Some("sam@barbers.co.uk"));
        let profile = market.user.get();
        assert_eq!(profile.name, "Sam Reid");
        assert_eq!(profile.email, "sam@barbers.co.uk");
        assert_eq!(profile.phone, "+44 7911 123456");
        assert!(session.inner().has_entered().await);
        assert!(barberhub_auth::is_first_session(auth.inner().current_user().as_ref()));
    }

    #[tokio::test]
    async fn test_sign_in_without_token() {
        let auth = AuthState::default();
        let session = SessionState::memory();
        let market = Marketplace::seeded();

        let err = sign_in(&auth, &session, &market, &ProviderResponse::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::MissingIdToken)));
        assert!(!session.inner().has_entered().await);
    }

    #[test]
    fn test_sign_in_request_needs_client_id() {
        let auth = AuthState::default();
        assert!(sign_in_request(&auth, Platform::Web).is_err());

        let mut config = OAuthConfig::default();
        config.google.web_client_id = Some("web-id".into());
        let request = sign_in_request(&AuthState::new(config), Platform::Web).unwrap();
        assert_eq!(request.client_id, "web-id");
    }
}
