//! Named destinations a command or screen can send the user to.
//!
//! Navigation itself belongs to the mobile shell; the app only says where.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Welcome,
    Home,
    Jobs,
    Barbers,
    Shops,
    Profile,
    JobDetail { id: String },
    BarberDetail { id: String },
    ShopDetail { id: String },
    /// Back to whatever screen opened the current modal.
    Back,
}

impl Route {
    pub fn job(id: impl Into<String>) -> Self {
        Route::JobDetail { id: id.into() }
    }

    pub fn barber(id: impl Into<String>) -> Self {
        Route::BarberDetail { id: id.into() }
    }

    pub fn shop(id: impl Into<String>) -> Self {
        Route::ShopDetail { id: id.into() }
    }
}
