//! # Barber Commands
//!
//! Barber profiles save immediately; there is no simulated delay.

use barberhub_core::forms::BarberForm;
use barberhub_store::Marketplace;
use tracing::{debug, info};

use crate::error::{Alert, AppResult};

/// Creates a barber profile, or updates the one with id `editing`.
pub fn add_barber(market: &Marketplace, form: &BarberForm, editing: Option<&str>) -> AppResult<Alert> {
    debug!(?editing, "add_barber command");

    let message = match editing {
        Some(id) => {
            let found = market.barbers.update(id, form.to_patch()?);
            info!(id, found, "barber profile edited");
            "Barber profile updated"
        }
        None => {
            let owner = market.user.get();
            let barber = market.barbers.add(form.to_draft(Some(&owner.email))?);
            info!(id = %barber.id, city = %barber.city, "barber profile created");
            "Barber profile created"
        }
    };

    Ok(Alert::new("Success", message))
}
