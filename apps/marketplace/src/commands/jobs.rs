//! # Job Commands
//!
//! Post a new job or save edits to an existing one.

use barberhub_core::forms::JobForm;
use barberhub_store::Marketplace;
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::error::{Alert, AppResult};

/// Submits the job form.
///
/// With `editing` set, the listing with that id is patched (an unknown id
/// changes nothing); otherwise a new listing owned by the current user is
/// added to the front of the feed. Invalid forms fail before the delay.
///
/// ## Returns
/// The "Posted" confirmation, e.g. `Test Cuts • full time`
pub async fn post_job(
    market: &Marketplace,
    ui: &UiConfig,
    form: &JobForm,
    editing: Option<&str>,
) -> AppResult<Alert> {
    debug!(?editing, "post_job command");
    form.validate().into_result(())?;

    tokio::time::sleep(ui.post_job_delay()).await;

    match editing {
        Some(id) => {
            let found = market.jobs.update(id, form.to_patch()?);
            info!(id, found, "job edited");
        }
        None => {
            let owner = market.user.get();
            let job = market.jobs.add(form.to_draft(Some(&owner.email))?);
            info!(id = %job.id, owner = %owner.email, "job posted");
        }
    }

    Ok(Alert::new("Posted", form.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use barberhub_core::JobType;
    use std::time::Duration;
    use tokio::time::Instant;

    fn test_cuts() -> JobForm {
        JobForm {
            shop_name: "Test Cuts".into(),
            location: "London, Soho".into(),
            salary_text: "£12/hour".into(),
            phone: "+447000000000".into(),
            ..JobForm::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_new_job() {
        let market = Marketplace::seeded();
        let before = market.jobs.len();
        let started = Instant::now();

        let alert = post_job(&market, &UiConfig::default(), &test_cuts(), None)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(alert, Alert::new("Posted", "Test Cuts • full time"));

        let jobs = market.jobs.get();
        assert_eq!(jobs.len(), before + 1);
        assert_eq!(jobs[0].shop_name, "Test Cuts");
        assert_eq!(jobs[0].job_type, JobType::FullTime);
        assert_eq!(jobs[0].city, "London");
        assert_eq!(jobs[0].area, "Soho");
        assert_eq!(jobs[0].owner_email.as_deref(), Some("user@google.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_existing_job() {
        let market = Marketplace::seeded();
        let mut form = JobForm::from_listing(&market.jobs.find("2").unwrap());
        form.location = "Leeds, Headingley".into();
        form.job_type = Some(JobType::Contract);

        post_job(&market, &UiConfig::default(), &form, Some("2"))
            .await
            .unwrap();

        let job = market.jobs.find("2").unwrap();
        assert_eq!(job.city, "Leeds");
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.shop_name, "Manchester Barber Co.");
        assert_eq!(market.jobs.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_form_adds_nothing() {
        let market = Marketplace::default();
        let form = JobForm {
            shop_name: "AB".into(),
            ..test_cuts()
        };
        let err = post_job(&market, &UiConfig::instant(), &form, None)
            .await
            .unwrap_err();

        let AppError::Form(errors) = err else {
            panic!("expected form errors, got {err:?}");
        };
        assert!(errors.get("shopName").is_some());
        assert!(market.jobs.is_empty());
    }
}
