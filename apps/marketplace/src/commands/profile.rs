//! # Profile Commands
//!
//! Saving the user's own profile, deleting their listings, signing out.

use barberhub_core::forms::ProfileForm;
use barberhub_core::views::MyListingsTab;
use barberhub_store::Marketplace;
use tracing::{debug, info};

use crate::error::{Alert, AppResult};
use crate::routes::Route;
use crate::state::{AuthState, SessionState};

/// Replaces the profile with the edited draft.
pub fn save_profile(market: &Marketplace, form: &ProfileForm) -> AppResult<Alert> {
    debug!("save_profile command");
    market.user.update(form.to_patch()?);
    info!(email = %form.email.trim(), "profile saved");
    Ok(Alert::new("Profile Updated", "Your changes have been saved."))
}

/// Prompt shown before deleting one of the user's listings.
pub fn delete_prompt(tab: MyListingsTab) -> Alert {
    match tab {
        MyListingsTab::Jobs => Alert::new("Delete Job", "Are you sure you want to delete this job?"),
        MyListingsTab::Shops => Alert::new(
            "Delete Shop",
            "Are you sure you want to delete this shop listing?",
        ),
        MyListingsTab::Barbers => Alert::new(
            "Delete Barber Profile",
            "Are you sure you want to delete this profile?",
        ),
    }
}

/// Deletes a listing after the user confirmed. Returns whether it existed.
pub fn delete_listing(market: &Marketplace, tab: MyListingsTab, id: &str) -> bool {
    let removed = match tab {
        MyListingsTab::Jobs => market.jobs.remove(id),
        MyListingsTab::Shops => market.shops.remove(id),
        MyListingsTab::Barbers => market.barbers.remove(id),
    };
    info!(?tab, id, removed, "listing deleted");
    removed
}

/// Forgets the session flag and signs out of the identity provider.
///
/// ## Returns
/// [`Route::Welcome`]
pub async fn sign_out(session: &SessionState, auth: &AuthState) -> AppResult<Route> {
    session.inner().clear_entered().await;
    auth.inner().sign_out().await?;
    Ok(Route::Welcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_save_profile() {
        let market = Marketplace::seeded();
        let mut form = ProfileForm::from_user(&market.user.get());
        form.name = "  Jordan Blake ".into();
        form.phone = String::new();

        let alert = save_profile(&market, &form).unwrap();
        assert_eq!(alert.title, "Profile Updated");

        let user = market.user.get();
        assert_eq!(user.name, "Jordan Blake");
        assert_eq!(user.phone, "");
    }

    #[test]
    fn test_invalid_profile_not_saved() {
        let market = Marketplace::seeded();
        let mut form = ProfileForm::from_user(&market.user.get());
        form.email = "not-an-email".into();

        assert!(matches!(save_profile(&market, &form), Err(AppError::Form(_))));
        assert_eq!(market.user.get().email, "user@google.com");
    }

    #[test]
    fn test_delete_listing() {
        let market = Marketplace::seeded();
        assert!(delete_listing(&market, MyListingsTab::Shops, "2"));
        assert!(!delete_listing(&market, MyListingsTab::Shops, "2"));
        assert_eq!(market.shops.len(), 1);
        assert_eq!(market.jobs.len(), 2);
        assert_eq!(delete_prompt(MyListingsTab::Jobs).title, "Delete Job");
    }

    #[tokio::test]
    async fn test_sign_out_clears_flag() {
        let session = SessionState::memory();
        let auth = AuthState::default();
        session.inner().mark_entered().await;

        let route = sign_out(&session, &auth).await.unwrap();
        assert_eq!(route, Route::Welcome);
        assert!(!session.inner().has_entered().await);
        assert!(auth.inner().current_user().is_none());
    }
}
