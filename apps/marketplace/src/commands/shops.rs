//! # Shop Commands

use barberhub_core::forms::ShopForm;
use barberhub_store::Marketplace;
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::error::{Alert, AppResult};

/// Submits the "List Your Shop" form.
///
/// Same create-or-edit rules as [`post_job`](super::jobs::post_job), with
/// the shorter shop delay.
pub async fn list_shop(
    market: &Marketplace,
    ui: &UiConfig,
    form: &ShopForm,
    editing: Option<&str>,
) -> AppResult<Alert> {
    debug!(?editing, "list_shop command");
    form.validate().into_result(())?;

    tokio::time::sleep(ui.list_shop_delay()).await;

    let title = match editing {
        Some(id) => {
            let found = market.shops.update(id, form.to_patch()?);
            info!(id, found, "shop edited");
            "Shop Updated"
        }
        None => {
            let owner = market.user.get();
            let shop = market.shops.add(form.to_draft(Some(&owner.email))?);
            info!(id = %shop.id, price = %shop.price, "shop listed");
            "Shop Listed"
        }
    };

    Ok(Alert::new(title, form.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_core::Gbp;
    use std::time::Duration;
    use tokio::time::Instant;

    fn form() -> ShopForm {
        let mut form = ShopForm {
            name: "Fade Factory".into(),
            location: "Edinburgh, Leith".into(),
            description: "Busy corner shop with loyal clients.".into(),
            phone: "+44 7000 000002".into(),
            ..ShopForm::default()
        };
        form.set_price_input("120000");
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_new_shop() {
        let market = Marketplace::seeded();
        let started = Instant::now();

        let alert = list_shop(&market, &UiConfig::default(), &form(), None)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(600));
        assert_eq!(alert, Alert::new("Shop Listed", "Fade Factory • £120,000"));
        let shop = &market.shops.get()[0];
        assert_eq!(shop.price, Gbp::from_pounds(120_000));
        assert_eq!(shop.city, "Edinburgh");
        assert_eq!(shop.owner_email.as_deref(), Some("user@google.com"));
    }

    #[tokio::test]
    async fn test_edit_shop_price() {
        let market = Marketplace::seeded();
        let mut form = ShopForm::from_listing(&market.shops.find("1").unwrap());
        form.set_price_input("90,000");

        let alert = list_shop(&market, &UiConfig::instant(), &form, Some("1"))
            .await
            .unwrap();

        assert_eq!(alert.title, "Shop Updated");
        assert_eq!(market.shops.find("1").unwrap().price, Gbp::from_pounds(90_000));
        assert_eq!(market.shops.len(), 2);
    }

    #[tokio::test]
    async fn test_short_description_rejected() {
        let market = Marketplace::default();
        let form = ShopForm {
            description: "Too short".into(),
            ..form()
        };
        assert!(list_shop(&market, &UiConfig::instant(), &form, None).await.is_err());
        assert!(market.shops.is_empty());
    }
}
