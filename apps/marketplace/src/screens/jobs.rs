//! # Jobs Screen
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Barber Jobs                  [+ Post Job]  │
//! │  [All Regions ▾]  [All Types ▾]             │
//! │  ┌───────────────────────────────────────┐  │
//! │  │ The Gentleman's Cut    full time      │  │
//! │  │ London, Shoreditch     £15-20/hour    │  │
//! │  └───────────────────────────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```

use barberhub_core::views::{first_id, JobFilter, JobTypeFilter, RegionFilter};
use barberhub_core::JobListing;
use barberhub_store::{CollectionStore, Marketplace};

use super::{AutoOpen, Watched};
use crate::routes::Route;

#[derive(Debug)]
pub struct JobsScreen {
    jobs: Watched<CollectionStore<JobListing>>,
    filter: JobFilter,
    auto_open: AutoOpen,
}

impl JobsScreen {
    /// Mounts the screen; `auto_open` asks for the newest job to be opened.
    pub fn mount(market: &Marketplace, auto_open: bool) -> Self {
        JobsScreen {
            jobs: Watched::mount(&market.jobs),
            filter: JobFilter::default(),
            auto_open: AutoOpen::new(auto_open),
        }
    }

    pub fn filter(&self) -> JobFilter {
        self.filter
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.filter.region = region;
    }

    pub fn set_job_type(&mut self, job_type: JobTypeFilter) {
        self.filter.job_type = job_type;
    }

    /// Jobs passing the current filters, newest first.
    pub fn visible(&self) -> Vec<JobListing> {
        let jobs = self.jobs.get();
        self.filter.apply(&jobs).into_iter().cloned().collect()
    }

    /// Detail route for the pending auto-open, once.
    pub fn auto_open(&mut self) -> Option<Route> {
        let jobs = self.jobs.get();
        self.auto_open.take(first_id(&jobs)).map(Route::job)
    }

    pub fn open(&self, id: &str) -> Route {
        Route::job(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::{JobType, NewJob, Region};

    #[test]
    fn test_rederives_after_add() {
        let market = Marketplace::seeded();
        let mut screen = JobsScreen::mount(&market, false);
        screen.set_region(RegionFilter::Only(Region::London));
        assert_eq!(screen.visible().len(), 1);

        market.jobs.add(NewJob {
            shop_name: "Soho Fades".into(),
            location: "London, Soho".into(),
            job_type: Some(JobType::PartTime),
            ..NewJob::default()
        });
        let visible = screen.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].shop_name, "Soho Fades");

        screen.set_job_type(JobTypeFilter::Only(JobType::FullTime));
        assert_eq!(screen.visible().len(), 1);
        assert_eq!(screen.filter().region, RegionFilter::Only(Region::London));
    }

    #[test]
    fn test_auto_open_newest_once() {
        let market = Marketplace::seeded();
        let mut screen = JobsScreen::mount(&market, true);
        assert_eq!(screen.auto_open(), Some(Route::job("1")));
        assert_eq!(screen.auto_open(), None);
    }

    #[test]
    fn test_unmount_unsubscribes() {
        let market = Marketplace::seeded();
        let screen = JobsScreen::mount(&market, false);
        assert_eq!(market.jobs.listener_count(), 1);
        drop(screen);
        assert_eq!(market.jobs.listener_count(), 0);
    }
}
