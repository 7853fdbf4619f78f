//! # Barbers Screen

use barberhub_core::views::{filter_barbers, first_id, RegionFilter};
use barberhub_core::BarberProfile;
use barberhub_store::{CollectionStore, Marketplace};

use super::{AutoOpen, Watched};
use crate::routes::Route;

#[derive(Debug)]
pub struct BarbersScreen {
    barbers: Watched<CollectionStore<BarberProfile>>,
    region: RegionFilter,
    auto_open: AutoOpen,
}

impl BarbersScreen {
    pub fn mount(market: &Marketplace, auto_open: bool) -> Self {
        BarbersScreen {
            barbers: Watched::mount(&market.barbers),
            region: RegionFilter::All,
            auto_open: AutoOpen::new(auto_open),
        }
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    pub fn visible(&self) -> Vec<BarberProfile> {
        let barbers = self.barbers.get();
        filter_barbers(&barbers, self.region)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn auto_open(&mut self) -> Option<Route> {
        let barbers = self.barbers.get();
        self.auto_open.take(first_id(&barbers)).map(Route::barber)
    }

    pub fn open(&self, id: &str) -> Route {
        Route::barber(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::{BarberPatch, Region};

    #[test]
    fn test_region_filter_follows_updates() {
        let market = Marketplace::seeded();
        let mut screen = BarbersScreen::mount(&market, false);
        screen.set_region(RegionFilter::Only(Region::Edinburgh));
        assert!(screen.visible().is_empty());

        market.barbers.update(
            "b2",
            BarberPatch {
                city: Some(Region::Edinburgh),
                ..BarberPatch::default()
            },
        );
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sofia Chen");
    }

    #[test]
    fn test_auto_open_waits_for_items() {
        let market = Marketplace::default();
        let mut screen = BarbersScreen::mount(&market, true);
        assert_eq!(screen.auto_open(), None);

        market.barbers.add(barberhub_core::NewBarber::new("Ali", Region::London));
        let id = market.barbers.get()[0].id.clone();
        assert_eq!(screen.auto_open(), Some(Route::barber(id)));
    }
}
