//! # Home Screen
//!
//! Greeting plus three featured shortcuts. A shortcut opens the newest item
//! of its store, or the matching tab when the store is empty.

use barberhub_core::views::{first_id, greeting};
use barberhub_core::UserProfile;
use barberhub_store::{Marketplace, RecordStore};

use super::Watched;
use crate::routes::Route;

#[derive(Debug)]
pub struct HomeScreen {
    market: Marketplace,
    user: Watched<RecordStore<UserProfile>>,
}

impl HomeScreen {
    pub fn mount(market: &Marketplace) -> Self {
        HomeScreen {
            market: market.clone(),
            user: Watched::mount(&market.user),
        }
    }

    /// "Hi, {name}".
    pub fn greeting(&self) -> String {
        greeting(&self.user.get().name)
    }

    pub fn featured_job(&self) -> Route {
        first_id(&self.market.jobs.get()).map_or(Route::Jobs, Route::job)
    }

    pub fn featured_barber(&self) -> Route {
        first_id(&self.market.barbers.get()).map_or(Route::Barbers, Route::barber)
    }

    pub fn featured_shop(&self) -> Route {
        first_id(&self.market.shops.get()).map_or(Route::Shops, Route::shop)
    }
}
