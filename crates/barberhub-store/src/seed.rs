//! # Demo Seed Data
//!
//! The listings a fresh install shows before anyone posts.
//!
//! Seed entities keep their short fixed ids ("1", "2", "b1".."b3") and have
//! no owner, so they never show up under "My Listings".

use barberhub_core::{
    BarberProfile, ContactInfo, Gbp, JobListing, JobType, Region, ShopListing, UserProfile,
};
use chrono::{DateTime, Duration, Utc};

const SEED_PHONE: &str = "+44 7000 000000";

/// Default profile before the user edits it.
pub fn default_user() -> UserProfile {
    UserProfile {
        name: "User via Google".to_string(),
        phone: "+44 7911 123456".to_string(),
        email: "user@google.com".to_string(),
        photo: None,
    }
}

fn job(
    id: &str,
    shop_name: &str,
    title: &str,
    (city, area): (&str, &str),
    job_type: JobType,
    salary_text: &str,
    description: &str,
) -> JobListing {
    JobListing {
        id: id.to_string(),
        shop_name: shop_name.to_string(),
        title: title.to_string(),
        location: format!("{}, {}", city, area),
        city: city.to_string(),
        area: area.to_string(),
        job_type,
        salary_text: salary_text.to_string(),
        description: description.to_string(),
        phone: SEED_PHONE.to_string(),
        photos: Vec::new(),
        owner_email: None,
    }
}

pub fn jobs() -> Vec<JobListing> {
    vec![
        job(
            "1",
            "The Gentleman's Cut",
            "Barber",
            ("London", "Shoreditch"),
            JobType::FullTime,
            "£15-20/hour",
            "Experienced barber needed",
        ),
        job(
            "2",
            "Manchester Barber Co.",
            "Senior Barber",
            ("Manchester", "City Centre"),
            JobType::RentAChair,
            "£250/week + tips",
            "Chair rent available",
        ),
    ]
}

fn barber(
    id: &str,
    name: &str,
    (city, area): (Region, &str),
    years: u32,
    skills: [&str; 3],
    available: bool,
    created_at: DateTime<Utc>,
) -> BarberProfile {
    BarberProfile {
        id: id.to_string(),
        name: name.to_string(),
        city,
        area: area.to_string(),
        years,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        bio: None,
        contact: ContactInfo {
            email: None,
            phone: None,
            via_email: false,
            via_phone: true,
        },
        available,
        avatar: None,
        created_at,
        owner_email: None,
    }
}

/// Seed barbers in display order.
pub fn barbers(now: DateTime<Utc>) -> Vec<BarberProfile> {
    vec![
        barber(
            "b1",
            "Marcus Johnson",
            (Region::London, "Camden"),
            8,
            ["Classic Cuts", "Beard Styling", "Fade Cuts"],
            true,
            now - Duration::seconds(300),
        ),
        barber(
            "b2",
            "Sofia Chen",
            (Region::Manchester, "Northern Quarter"),
            5,
            ["Creative Cuts", "Color Work", "Undercuts"],
            true,
            now - Duration::seconds(200),
        ),
        barber(
            "b3",
            "James Thompson",
            (Region::Birmingham, "Jewellery Quarter"),
            12,
            ["Traditional Cuts", "Straight Razor", "Mustache Grooming"],
            false,
            now - Duration::seconds(100),
        ),
    ]
}

pub fn shops() -> Vec<ShopListing> {
    vec![
        ShopListing {
            id: "1".to_string(),
            name: "Prime Location Barber Shop".to_string(),
            price: Gbp::from_pounds(85_000),
            location: "London, Islington".to_string(),
            city: "London".to_string(),
            area: "Islington".to_string(),
            description: "Well-established barber shop in prime Islington location. \
                          Fully operational with strong foot traffic and loyal clientele."
                .to_string(),
            phone: SEED_PHONE.to_string(),
            photos: Vec::new(),
            chairs: Some(4),
            owner_email: None,
        },
        ShopListing {
            id: "2".to_string(),
            name: "Traditional Barber Shop".to_string(),
            price: Gbp::from_pounds(45_000),
            location: "Manchester, Oldham".to_string(),
            city: "Manchester".to_string(),
            area: "Oldham".to_string(),
            description: "Traditional barbering studio with loyal customer base. \
                          Perfect for an owner-operator looking to grow."
                .to_string(),
            phone: "+44 7000 000001".to_string(),
            photos: Vec::new(),
            chairs: Some(3),
            owner_email: None,
        },
    ]
}
