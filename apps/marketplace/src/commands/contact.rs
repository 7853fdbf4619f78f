//! # Contact Commands
//!
//! Links the detail screens hand to the OS to start a call or an email.

use barberhub_core::{BarberProfile, JobListing, ShopListing};

use crate::error::{AppError, AppResult};

/// `tel:` link with whitespace removed from the number.
pub fn dial_link(phone: Option<&str>, missing: &str) -> AppResult<String> {
    let number: String = phone
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if number.is_empty() {
        return Err(AppError::NoContact(missing.to_string()));
    }
    Ok(format!("tel:{}", number))
}

pub fn dial_job(job: &JobListing) -> AppResult<String> {
    dial_link(Some(&job.phone), "This listing did not include a phone number.")
}

pub fn dial_shop(shop: &ShopListing) -> AppResult<String> {
    dial_link(Some(&shop.phone), "This listing did not include a phone number.")
}

pub fn dial_barber(barber: &BarberProfile) -> AppResult<String> {
    dial_link(barber.contact.phone.as_deref(), "This profile has no phone number.")
}

pub fn email_barber(barber: &BarberProfile) -> AppResult<String> {
    match barber.contact.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => Ok(format!("mailto:{}", email)),
        _ => Err(AppError::NoContact("This profile has no email.".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberhub_store::seed;
    use chrono::Utc;

    #[test]
    fn test_dial_strips_spaces() {
        let job = &seed::jobs()[0];
        assert_eq!(dial_job(job).unwrap(), "tel:+447000000000");
    }

    #[test]
    fn test_missing_channels() {
        let mut shop = seed::shops()[0].clone();
        shop.phone = "  ".into();
        let err = dial_shop(&shop).unwrap_err();
        assert_eq!(err.to_string(), "This listing did not include a phone number.");

        let mut barber = seed::barbers(Utc::now())[0].clone();
        barber.contact.phone = None;
        barber.contact.email = None;
        assert_eq!(
            dial_barber(&barber).unwrap_err().to_string(),
            "This profile has no phone number."
        );
        assert_eq!(
            email_barber(&barber).unwrap_err().to_string(),
            "This profile has no email."
        );

        barber.contact.email = Some("marcus@example.com".into());
        assert_eq!(email_barber(&barber).unwrap(), "mailto:marcus@example.com");
    }
}
