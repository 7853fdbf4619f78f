//! # Profile Screen
//!
//! ```text
//! ┌──────────────┐  start_edit   ┌──────────────────┐
//! │     View     │──────────────►│  Edit(draft)     │
//! │              │◄──────────────│                  │
//! └──────────────┘ save / cancel └──────────────────┘
//!        │ change_photo: picks, then switches to Edit with the preview
//!        ▼
//!   My Listings [Jobs (n)] [Shops (n)] [Barbers (n)]
//! ```

use barberhub_core::forms::ProfileForm;
use barberhub_core::views::{MyListings, MyListingsTab};
use barberhub_core::{BarberProfile, JobListing, ShopListing, UserProfile};
use barberhub_store::{CollectionStore, Marketplace, RecordStore};

use super::Watched;
use crate::commands::profile;
use crate::error::{Alert, AppResult};
use crate::media::{self, MediaPicker};

/// Whether the profile card shows values or the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileMode {
    View,
    Edit(ProfileForm),
}

#[derive(Debug)]
pub struct ProfileScreen {
    market: Marketplace,
    user: Watched<RecordStore<UserProfile>>,
    jobs: Watched<CollectionStore<JobListing>>,
    shops: Watched<CollectionStore<ShopListing>>,
    barbers: Watched<CollectionStore<BarberProfile>>,
    mode: ProfileMode,
    tab: MyListingsTab,
}

impl ProfileScreen {
    pub fn mount(market: &Marketplace) -> Self {
        ProfileScreen {
            market: market.clone(),
            user: Watched::mount(&market.user),
            jobs: Watched::mount(&market.jobs),
            shops: Watched::mount(&market.shops),
            barbers: Watched::mount(&market.barbers),
            mode: ProfileMode::View,
            tab: MyListingsTab::default(),
        }
    }

    pub fn user(&self) -> UserProfile {
        (*self.user.get()).clone()
    }

    pub fn mode(&self) -> &ProfileMode {
        &self.mode
    }

    pub fn start_edit(&mut self) {
        self.mode = ProfileMode::Edit(ProfileForm::from_user(&self.user.get()));
    }

    pub fn cancel_edit(&mut self) {
        self.mode = ProfileMode::View;
    }

    /// The draft being edited, if any.
    pub fn draft_mut(&mut self) -> Option<&mut ProfileForm> {
        match &mut self.mode {
            ProfileMode::Edit(form) => Some(form),
            ProfileMode::View => None,
        }
    }

    /// Whether the save button is enabled.
    pub fn can_save(&self) -> bool {
        matches!(&self.mode, ProfileMode::Edit(form) if form.can_save())
    }

    /// Saves the draft and returns to view mode. In view mode nothing happens.
    pub fn save(&mut self) -> AppResult<Option<Alert>> {
        let ProfileMode::Edit(form) = &self.mode else {
            return Ok(None);
        };
        let alert = profile::save_profile(&self.market, form)?;
        self.mode = ProfileMode::View;
        Ok(Some(alert))
    }

    /// Picks a new photo into the draft, entering edit mode if needed.
    pub async fn change_photo<P: MediaPicker>(&mut self, picker: &P) -> AppResult<()> {
        let current = match &self.mode {
            ProfileMode::Edit(form) => form.photo.clone(),
            ProfileMode::View => self.user.get().photo.clone(),
        };
        let picked = media::pick_avatar(picker, current.clone()).await?;
        if picked == current {
            return Ok(());
        }
        if self.mode == ProfileMode::View {
            self.start_edit();
        }
        if let Some(form) = self.draft_mut() {
            form.photo = picked;
        }
        Ok(())
    }

    pub fn tab(&self) -> MyListingsTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: MyListingsTab) {
        self.tab = tab;
    }

    /// Listings owned by the current user's email.
    pub fn my_listings(&self) -> MyListings {
        MyListings::collect(
            &self.user.get().email,
            &self.jobs.get(),
            &self.shops.get(),
            &self.barbers.get(),
        )
    }

    /// Tab label with its count, e.g. `Jobs (2)`.
    pub fn tab_label(&self, tab: MyListingsTab) -> String {
        let name = match tab {
            MyListingsTab::Jobs => "Jobs",
            MyListingsTab::Shops => "Shops",
            MyListingsTab::Barbers => "Barbers",
        };
        format!("{} ({})", name, self.my_listings().count(tab))
    }

    /// Deletes one of the user's listings from the selected tab.
    pub fn delete(&self, id: &str) -> bool {
        profile::delete_listing(&self.market, self.tab, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ScriptedPicker;
    use barberhub_core::{NewJob, PhotoRef};

    fn owned_job(market: &Marketplace, email: &str) -> String {
        market
            .jobs
            .add(NewJob {
                shop_name: "My Shop".into(),
                location: "London".into(),
                owner_email: Some(email.into()),
                ..NewJob::default()
            })
            .id
    }

    #[test]
    fn test_my_listings_follow_stores() {
        let market = Marketplace::seeded();
        let mut screen = ProfileScreen::mount(&market);
        assert!(screen.my_listings().is_empty());

        let id = owned_job(&market, "user@google.com");
        owned_job(&market, "USER@google.com");
        assert_eq!(screen.tab_label(MyListingsTab::Jobs), "Jobs (1)");

        screen.select_tab(MyListingsTab::Jobs);
        assert!(screen.delete(&id));
        assert_eq!(screen.my_listings().count(MyListingsTab::Jobs), 0);
    }

    #[test]
    fn test_edit_save_cycle() {
        let market = Marketplace::seeded();
        let mut screen = ProfileScreen::mount(&market);
        assert_eq!(screen.save().unwrap(), None);

        screen.start_edit();
        screen.draft_mut().unwrap().name = "J".into();
        assert!(!screen.can_save());
        assert!(screen.save().is_err());

        screen.draft_mut().unwrap().name = "Jordan".into();
        let alert = screen.save().unwrap().unwrap();
        assert_eq!(alert.message, "Your changes have been saved.");
        assert_eq!(screen.mode(), &ProfileMode::View);
        assert_eq!(screen.user().name, "Jordan");
    }

    #[test]
    fn test_changing_email_changes_ownership() {
        let market = Marketplace::seeded();
        let mut screen = ProfileScreen::mount(&market);
        owned_job(&market, "new@shop.com");

        screen.start_edit();
        screen.draft_mut().unwrap().email = "new@shop.com".into();
        screen.save().unwrap();
        assert_eq!(screen.my_listings().count(MyListingsTab::Jobs), 1);
    }

    #[tokio::test]
    async fn test_change_photo_enters_edit_mode() {
        let market = Marketplace::seeded();
        let mut screen = ProfileScreen::mount(&market);
        let picker = ScriptedPicker::granted();
        picker.push_uris(["file:///me.jpg"]);

        screen.change_photo(&picker).await.unwrap();
        let ProfileMode::Edit(form) = screen.mode() else {
            panic!("expected edit mode");
        };
        assert_eq!(form.photo, Some(PhotoRef::new("file:///me.jpg")));
        assert_eq!(screen.user().photo, None);

        screen.cancel_edit();
        assert_eq!(screen.mode(), &ProfileMode::View);
    }
}
