//! # Shops Screen

use barberhub_core::views::{filter_shops, first_id, RegionFilter};
use barberhub_core::ShopListing;
use barberhub_store::{CollectionStore, Marketplace};

use super::{AutoOpen, Watched};
use crate::routes::Route;

#[derive(Debug)]
pub struct ShopsScreen {
    shops: Watched<CollectionStore<ShopListing>>,
    region: RegionFilter,
    auto_open: AutoOpen,
}

impl ShopsScreen {
    pub fn mount(market: &Marketplace, auto_open: bool) -> Self {
        ShopsScreen {
            shops: Watched::mount(&market.shops),
            region: RegionFilter::All,
            auto_open: AutoOpen::new(auto_open),
        }
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    pub fn visible(&self) -> Vec<ShopListing> {
        let shops = self.shops.get();
        filter_shops(&shops, self.region).into_iter().cloned().collect()
    }

    pub fn auto_open(&mut self) -> Option<Route> {
        let shops = self.shops.get();
        self.auto_open.take(first_id(&shops)).map(Route::shop)
    }

    pub fn open(&self, id: &str) -> Route {
        Route::shop(id)
    }
}
