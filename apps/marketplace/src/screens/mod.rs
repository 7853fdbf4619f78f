//! # Screens Module
//!
//! One view model per screen. A screen mounts by subscribing to the stores
//! it shows, keeps a local copy of each snapshot, and recomputes what it
//! renders from that copy plus its own filter state. Dropping a screen
//! unsubscribes it.
//!
//! ```text
//! screens/
//! ├── mod.rs      ◄─── You are here (exports, auto-open)
//! ├── watch.rs    ◄─── Watched<S>: local snapshot + subscription
//! ├── home.rs     ◄─── Greeting and featured shortcuts
//! ├── jobs.rs     ◄─── Job feed with region and type filters
//! ├── barbers.rs  ◄─── Barber directory with region filter
//! ├── shops.rs    ◄─── Shops for sale with region filter
//! ├── detail.rs   ◄─── Job / barber / shop detail and contact actions
//! └── profile.rs  ◄─── Profile editing and "My Listings"
//! ```

pub mod barbers;
pub mod detail;
pub mod home;
pub mod jobs;
pub mod profile;
pub mod shops;
pub mod watch;

pub use barbers::BarbersScreen;
pub use detail::DetailScreen;
pub use home::HomeScreen;
pub use jobs::JobsScreen;
pub use profile::{ProfileMode, ProfileScreen};
pub use shops::ShopsScreen;
pub use watch::{Observable, Watched};

/// "Open the first item" request a list screen honours once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoOpen {
    requested: bool,
    done: bool,
}

impl AutoOpen {
    pub fn new(requested: bool) -> Self {
        AutoOpen {
            requested,
            done: false,
        }
    }

    /// Id to open, the first time an item is available.
    pub fn take(&mut self, first: Option<&str>) -> Option<String> {
        if !self.requested || self.done {
            return None;
        }
        let id = first?;
        self.done = true;
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_open_fires_once() {
        let mut auto = AutoOpen::new(true);
        assert_eq!(auto.take(None), None);
        assert_eq!(auto.take(Some("a")), Some("a".to_string()));
        assert_eq!(auto.take(Some("b")), None);

        let mut off = AutoOpen::new(false);
        assert_eq!(off.take(Some("a")), None);
    }
}
