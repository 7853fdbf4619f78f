//! # Forms
//!
//! Raw state behind the four editing screens and the rules that gate their
//! submit buttons.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen          Form          new listing        editing existing id  │
//! │  ──────────────  ────────────  ─────────────────  ──────────────────── │
//! │  Post a job      JobForm       to_draft → NewJob  to_patch → JobPatch  │
//! │  List a shop     ShopForm      to_draft → NewShop to_patch → ShopPatch │
//! │  Add barber      BarberForm    to_draft → NewBarber  to_patch → Patch  │
//! │  Profile         ProfileForm   (singleton)        to_patch → UserPatch │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `validate` never fails loudly: it returns [`FormErrors`] for the screen to
//! render inline. The conversions return the same errors when called on an
//! invalid form.

use serde::{Deserialize, Serialize};

use crate::error::FormErrors;
use crate::money::{format_price_input, Gbp};
use crate::types::{
    skill_set, BarberPatch, BarberProfile, ContactInfo, ContactPreference, JobListing, JobPatch,
    JobType, NewBarber, NewJob, NewShop, PhotoRef, Region, ShopListing, ShopPatch, UserPatch,
    UserProfile,
};
use crate::validation::{
    parse_years_label, validate_email, validate_min_chars, validate_phone, validate_photo_count,
    validate_price_input, validate_required, PhoneRule,
};
use crate::{DEFAULT_JOB_TITLE, MAX_JOB_PHOTOS, MAX_SHOP_PHOTOS};

// =============================================================================
// Catalogues
// =============================================================================

/// Skill chips offered on the barber form.
pub const SKILL_CATALOG: [&str; 12] = [
    "Classic Cuts",
    "Beard Styling",
    "Fade Cuts",
    "Creative Cuts",
    "Color Work",
    "Undercuts",
    "Straight Razor",
    "Mustache Grooming",
    "Hot Towel Shave",
    "Clipper Work",
    "Head Shaving",
    "Texture Cutting",
];

/// Speciality chips offered on the barber form.
pub const SPECIALTY_CATALOG: [&str; 12] = [
    "Traditional Barbering",
    "Modern Styles",
    "Wedding/Events",
    "Corporate Cuts",
    "Afro-Caribbean Hair",
    "Curly Hair",
    "Men's Grooming",
    "Vintage Styles",
    "Creative Cuts",
    "Children's Cuts",
    "Senior Clients",
    "Hair Treatments",
];

/// Experience picker labels.
pub const EXPERIENCE_LEVELS: [&str; 5] = [
    "0-1 years",
    "2-3 years",
    "4-6 years",
    "7-10 years",
    "10+ years",
];

/// Appends picked photos to a form's list without exceeding `max`.
///
/// ## Example
/// ```rust
/// use barberhub_core::forms::merge_photos;
/// use barberhub_core::PhotoRef;
///
/// let existing = vec![PhotoRef::new("a"), PhotoRef::new("b")];
/// let picked = vec![PhotoRef::new("c"), PhotoRef::new("d")];
/// let merged = merge_photos(&existing, picked, 3);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged[2].uri, "c");
/// ```
pub fn merge_photos(existing: &[PhotoRef], picked: Vec<PhotoRef>, max: usize) -> Vec<PhotoRef> {
    let space = max.saturating_sub(existing.len());
    existing
        .iter()
        .cloned()
        .chain(picked.into_iter().take(space))
        .take(max)
        .collect()
}

/// Removes the photo at `index`, ignoring out-of-range indexes.
pub fn remove_photo(photos: &mut Vec<PhotoRef>, index: usize) {
    if index < photos.len() {
        photos.remove(index);
    }
}

// =============================================================================
// Job Form
// =============================================================================

/// State of the "Post a Job" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    pub shop_name: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub salary_text: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
}

impl JobForm {
    /// Prefills the form from an existing listing.
    pub fn from_listing(job: &JobListing) -> Self {
        JobForm {
            shop_name: job.shop_name.clone(),
            location: job.location.clone(),
            job_type: Some(job.job_type),
            salary_text: job.salary_text.clone(),
            description: job.description.clone(),
            phone: job.phone.clone(),
            photos: job.photos.clone(),
        }
    }

    /// Per-field errors; empty when the form can be submitted.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(validate_min_chars("shopName", &self.shop_name, 3));
        errors.check(validate_required("location", &self.location));
        errors.check(validate_required("salaryText", &self.salary_text));
        errors.check(validate_phone("phone", &self.phone, PhoneRule::LISTING));
        errors.check(validate_photo_count("photos", self.photos.len(), MAX_JOB_PHOTOS));
        errors
    }

    /// Job type that will be stored.
    pub fn effective_type(&self) -> JobType {
        self.job_type.unwrap_or_default()
    }

    /// Confirmation line shown after posting: `"Test Cuts • full time"`.
    pub fn summary(&self) -> String {
        format!("{} • {}", self.shop_name.trim(), self.effective_type())
    }

    /// Draft for a new listing owned by `owner_email`.
    pub fn to_draft(&self, owner_email: Option<&str>) -> Result<NewJob, FormErrors> {
        let draft = NewJob {
            shop_name: self.shop_name.clone(),
            location: self.location.clone(),
            job_type: Some(self.effective_type()),
            salary_text: self.salary_text.clone(),
            description: self.description.clone(),
            phone: self.phone.clone(),
            photos: self.photos.clone(),
            owner_email: owner_email.map(str::to_string),
        };
        self.validate().into_result(draft)
    }

    /// Patch rewriting every editable field of an existing listing.
    pub fn to_patch(&self) -> Result<JobPatch, FormErrors> {
        let patch = JobPatch {
            shop_name: Some(self.shop_name.trim().to_string()),
            title: Some(DEFAULT_JOB_TITLE.to_string()),
            job_type: Some(self.effective_type()),
            salary_text: Some(self.salary_text.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            photos: Some(self.photos.clone()),
            ..JobPatch::default()
        }
        .relocate(&self.location);
        self.validate().into_result(patch)
    }
}

// =============================================================================
// Shop Form
// =============================================================================

/// State of the "List Your Shop" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopForm {
    pub name: String,
    /// Price as displayed in the input, e.g. `"85,000"`.
    pub price: String,
    pub location: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
}

impl ShopForm {
    /// Prefills the form from an existing listing.
    pub fn from_listing(shop: &ShopListing) -> Self {
        ShopForm {
            name: shop.name.clone(),
            price: shop.price.grouped(),
            location: shop.location.clone(),
            description: shop.description.clone(),
            phone: shop.phone.clone(),
            photos: shop.photos.clone(),
        }
    }

    /// Stores what was typed in the price field, regrouped.
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = format_price_input(raw);
    }

    /// Per-field errors; empty when the form can be submitted.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(validate_required("name", &self.name));
        errors.check(validate_price_input("price", &self.price));
        errors.check(validate_required("location", &self.location));
        errors.check(validate_min_chars("description", &self.description, 10));
        errors.check(validate_phone("phone", &self.phone, PhoneRule::LISTING));
        errors.check(validate_photo_count("photos", self.photos.len(), MAX_SHOP_PHOTOS));
        errors
    }

    fn parsed_price(&self) -> Result<Gbp, FormErrors> {
        let mut errors = FormErrors::new();
        match errors.check(validate_price_input("price", &self.price)) {
            Some(price) => Ok(price),
            None => Err(errors),
        }
    }

    /// Confirmation line shown after listing: `"Fade Factory • £60,000"`.
    pub fn summary(&self) -> String {
        match Gbp::parse_input(&self.price) {
            Some(price) => format!("{} • {}", self.name.trim(), price),
            None => self.name.trim().to_string(),
        }
    }

    /// Draft for a new listing owned by `owner_email`.
    pub fn to_draft(&self, owner_email: Option<&str>) -> Result<NewShop, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewShop {
            name: self.name.clone(),
            price: self.parsed_price()?,
            location: self.location.clone(),
            description: self.description.clone(),
            phone: self.phone.clone(),
            photos: self.photos.clone(),
            chairs: None,
            owner_email: owner_email.map(str::to_string),
        })
    }

    /// Patch rewriting every editable field of an existing listing.
    pub fn to_patch(&self) -> Result<ShopPatch, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ShopPatch {
            name: Some(self.name.trim().to_string()),
            price: Some(self.parsed_price()?),
            description: Some(self.description.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            photos: Some(self.photos.clone()),
            ..ShopPatch::default()
        }
        .relocate(&self.location))
    }
}

// =============================================================================
// Barber Form
// =============================================================================

/// State of the "Add Barber Profile" screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberForm {
    pub name: String,
    pub city: Option<Region>,
    pub area: String,
    /// One of [`EXPERIENCE_LEVELS`], or empty.
    pub years_label: String,
    pub skills: Vec<String>,
    pub specialties: Vec<String>,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub available: bool,
    pub photo: Option<PhotoRef>,
}

impl Default for BarberForm {
    fn default() -> Self {
        BarberForm {
            name: String::new(),
            city: None,
            area: String::new(),
            years_label: String::new(),
            skills: Vec::new(),
            specialties: Vec::new(),
            bio: String::new(),
            email: String::new(),
            phone: String::new(),
            available: true,
            photo: None,
        }
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|s| s == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

fn add_custom(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|s| s == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

impl BarberForm {
    /// Prefills the form from an existing profile.
    pub fn from_profile(barber: &BarberProfile) -> Self {
        BarberForm {
            name: barber.name.clone(),
            city: Some(barber.city),
            area: barber.area.clone(),
            years_label: if barber.years > 0 {
                format!("{} years", barber.years)
            } else {
                String::new()
            },
            skills: barber.skills.clone(),
            specialties: Vec::new(),
            bio: barber.bio.clone().unwrap_or_default(),
            email: barber.contact.email.clone().unwrap_or_default(),
            phone: barber.contact.phone.clone().unwrap_or_default(),
            available: barber.available,
            photo: barber.avatar.clone(),
        }
    }

    /// Selects or deselects a skill chip.
    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.skills, skill);
    }

    /// Selects or deselects a speciality chip.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        toggle(&mut self.specialties, specialty);
    }

    /// Adds a typed skill. Returns false for blanks and duplicates.
    pub fn add_custom_skill(&mut self, skill: &str) -> bool {
        add_custom(&mut self.skills, skill)
    }

    /// Adds a typed speciality. Returns false for blanks and duplicates.
    pub fn add_custom_specialty(&mut self, specialty: &str) -> bool {
        add_custom(&mut self.specialties, specialty)
    }

    /// Skills and specialities merged with set semantics.
    pub fn combined_skills(&self) -> Vec<String> {
        skill_set(self.skills.iter().chain(self.specialties.iter()))
    }

    /// Years of experience parsed from the picked label.
    pub fn years(&self) -> u32 {
        parse_years_label(&self.years_label)
    }

    /// Per-field errors; empty when the form can be submitted.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(validate_min_chars("name", &self.name, 2));
        if self.city.is_none() {
            errors.push(crate::ValidationError::Required {
                field: "city".to_string(),
            });
        }
        if !self.email.trim().is_empty() {
            errors.check(validate_email("email", &self.email));
        }
        errors.check(validate_phone("phone", &self.phone, PhoneRule::BARBER));
        errors
    }

    /// Email is offered whenever an address was given; phone always is.
    fn contact(&self) -> ContactInfo {
        let email = Some(self.email.trim().to_string()).filter(|e| !e.is_empty());
        let phone = Some(self.phone.trim().to_string()).filter(|p| !p.is_empty());
        ContactInfo {
            via_email: email.is_some(),
            via_phone: true,
            email,
            phone,
        }
    }

    /// Draft for a new profile owned by `owner_email`.
    pub fn to_draft(&self, owner_email: Option<&str>) -> Result<NewBarber, FormErrors> {
        let errors = self.validate();
        let Some(city) = self.city.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };
        let contact = self.contact();
        Ok(NewBarber {
            name: self.name.clone(),
            city,
            area: Some(self.area.clone()),
            years: Some(self.years()),
            skills: self.combined_skills(),
            bio: Some(self.bio.clone()),
            contact_by: ContactPreference {
                email: contact.via_email,
                phone: contact.via_phone,
            },
            email: contact.email,
            phone: contact.phone,
            available: self.available,
            photo: self.photo.clone(),
            owner_email: owner_email.map(str::to_string),
        })
    }

    /// Patch rewriting every editable field of an existing profile.
    pub fn to_patch(&self) -> Result<BarberPatch, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BarberPatch {
            name: Some(self.name.trim().to_string()),
            city: self.city,
            area: Some(self.area.trim().to_string()),
            years: Some(self.years()),
            skills: Some(self.combined_skills()),
            bio: Some(self.bio.clone()),
            contact: Some(self.contact()),
            available: Some(self.available),
            avatar: Some(self.photo.clone()),
        })
    }
}

// =============================================================================
// Profile Form
// =============================================================================

/// Draft of the user's own profile while in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub photo: Option<PhotoRef>,
}

impl ProfileForm {
    /// Starts editing from the current profile.
    pub fn from_user(user: &UserProfile) -> Self {
        ProfileForm {
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            photo: user.photo.clone(),
        }
    }

    /// Per-field errors; empty when the draft can be saved.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(validate_email("email", &self.email));
        if !self.phone.trim().is_empty() {
            errors.check(validate_phone("phone", &self.phone, PhoneRule::PROFILE));
        }
        errors.check(validate_min_chars("name", &self.name, 2));
        errors
    }

    /// True when the save button is enabled.
    pub fn can_save(&self) -> bool {
        self.validate().is_empty()
    }

    /// Patch replacing the whole profile with this draft.
    pub fn to_patch(&self) -> Result<UserPatch, FormErrors> {
        let patch = UserPatch {
            name: Some(self.name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            photo: Some(self.photo.clone()),
        };
        self.validate().into_result(patch)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
