//! # Detail Screens
//!
//! A detail screen follows one entity by id. If the entity is deleted while
//! the screen is open, [`DetailScreen::current`] turns `None`.

use barberhub_core::{BarberProfile, Entity, JobListing, ShopListing};
use barberhub_store::CollectionStore;

use super::Watched;
use crate::commands::contact;
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct DetailScreen<E: Entity> {
    items: Watched<CollectionStore<E>>,
    id: String,
}

impl<E: Entity> DetailScreen<E> {
    pub fn mount(store: &CollectionStore<E>, id: impl Into<String>) -> Self {
        DetailScreen {
            items: Watched::mount(store),
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The entity as of the latest store change.
    pub fn current(&self) -> Option<E> {
        self.items
            .get()
            .iter()
            .find(|item| item.id() == self.id)
            .cloned()
    }

    fn with_current<T>(&self, f: impl FnOnce(&E) -> AppResult<T>) -> AppResult<T> {
        let item = self
            .current()
            .ok_or_else(|| AppError::NoContact("This listing is no longer available.".into()))?;
        f(&item)
    }
}

impl DetailScreen<JobListing> {
    pub fn dial(&self) -> AppResult<String> {
        self.with_current(contact::dial_job)
    }
}

impl DetailScreen<ShopListing> {
    pub fn dial(&self) -> AppResult<String> {
        self.with_current(contact::dial_shop)
    }
}

impl DetailScreen<BarberProfile> {
    pub fn dial(&self) -> AppResult<String> {
        self.with_current(contact::dial_barber)
    }

    pub fn email(&self) -> AppResult<String> {
        self.with_current(contact::email_barber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::JobPatch;
    use barberhub_store::Marketplace;

    #[test]
    fn test_follows_edits_and_deletes() {
        let market = Marketplace::seeded();
        let screen = DetailScreen::mount(&market.jobs, "1");
        assert_eq!(screen.dial().unwrap(), "tel:+447000000000");

        market.jobs.update(
            "1",
            JobPatch {
                phone: Some("+44 20 7946 0000".into()),
                ..JobPatch::default()
            },
        );
        assert_eq!(screen.dial().unwrap(), "tel:+442079460000");

        market.jobs.remove("1");
        assert!(screen.current().is_none());
        assert!(matches!(screen.dial(), Err(AppError::NoContact(_))));
    }

    #[test]
    fn test_barber_contact() {
        let market = Marketplace::seeded();
        let screen = DetailScreen::mount(&market.barbers, "b1");
        assert_eq!(screen.id(), "b1");
        assert_eq!(
            screen.dial().unwrap_err().to_string(),
            "This profile has no phone number."
        );
    }
}
