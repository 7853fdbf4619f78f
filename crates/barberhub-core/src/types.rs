//! # Domain Types
//!
//! Core domain types used throughout BarberHub.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   JobListing    │   │  BarberProfile  │   │   ShopListing   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  shop_name      │   │  name, city     │   │  name, price    │       │
//! │  │  location       │   │  skills (set)   │   │  location       │       │
//! │  │  job_type       │   │  contact        │   │  photos (≤ 4)   │       │
//! │  │  photos (≤ 3)   │   │  created_at     │   │  owner_email    │       │
//! │  │  owner_email    │   │  owner_email    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   UserProfile   │   │     Region      │   │    JobType      │       │
//! │  │  (singleton)    │   │  London         │   │  full time      │       │
//! │  │  name, phone    │   │  Manchester     │   │  part time      │       │
//! │  │  email, photo   │   │  Birmingham     │   │  rent a chair   │       │
//! │  └─────────────────┘   │  Edinburgh      │   │  temporary      │       │
//! │                        └─────────────────┘   │  contract       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Draft / Patch Pairs
//! Every collection entity has a `New*` draft accepted by `add` and a
//! `*Patch` accepted by `update`. Patches name exactly the fields that may
//! change; `None` means "leave as is".
//!
//! ## Ownership
//! `owner_email` is the creator's email. It is a soft link used only for the
//! "my listings" partition. Seed data has no owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::{Entity, Patchable};
use crate::error::CoreError;
use crate::location::{effective_city, ParsedLocation};
use crate::money::Gbp;
use crate::{CARD_SKILL_LIMIT, DEFAULT_JOB_TITLE, MAX_JOB_PHOTOS, MAX_SHOP_PHOTOS};

// =============================================================================
// Region
// =============================================================================

/// The four cities the marketplace operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Region {
    London,
    Manchester,
    Birmingham,
    Edinburgh,
}

impl Region {
    /// Every region, in the order the pickers list them.
    pub const ALL: [Region; 4] = [
        Region::London,
        Region::Manchester,
        Region::Birmingham,
        Region::Edinburgh,
    ];

    /// Display name, also the value stored on listings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Region::London => "London",
            Region::Manchester => "Manchester",
            Region::Birmingham => "Birmingham",
            Region::Edinburgh => "Edinburgh",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRegion(s.to_string()))
    }
}

// =============================================================================
// Job Type
// =============================================================================

/// Kind of position a job listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JobType {
    #[default]
    #[serde(rename = "full time")]
    FullTime,
    #[serde(rename = "part time")]
    PartTime,
    #[serde(rename = "rent a chair")]
    RentAChair,
    #[serde(rename = "temporary")]
    Temporary,
    #[serde(rename = "contract")]
    Contract,
}

impl JobType {
    /// Every job type, in picker order.
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::RentAChair,
        JobType::Temporary,
        JobType::Contract,
    ];

    /// Label shown on cards and in the type picker.
    pub const fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full time",
            JobType::PartTime => "part time",
            JobType::RentAChair => "rent a chair",
            JobType::Temporary => "temporary",
            JobType::Contract => "contract",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownJobType(s.to_string()))
    }
}

// =============================================================================
// Shared Value Types
// =============================================================================

/// Reference to a locally picked photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhotoRef {
    pub uri: String,
}

impl PhotoRef {
    pub fn new(uri: impl Into<String>) -> Self {
        PhotoRef { uri: uri.into() }
    }
}

/// How a barber wants to be contacted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub via_email: bool,
    pub via_phone: bool,
}

/// Preferred contact channels ticked on the barber form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactPreference {
    pub email: bool,
    pub phone: bool,
}

impl Default for ContactPreference {
    fn default() -> Self {
        ContactPreference {
            email: false,
            phone: true,
        }
    }
}

/// Deduplicates skills, keeping first occurrences in order.
///
/// Entries are trimmed and blanks are dropped.
pub fn skill_set<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

fn trimmed_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn capped(mut photos: Vec<PhotoRef>, max: usize) -> Vec<PhotoRef> {
    photos.truncate(max);
    photos
}

// =============================================================================
// Job Listing
// =============================================================================

/// A job advertised by a barber shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct JobListing {
    pub id: String,
    /// Employer shown on the card.
    pub shop_name: String,
    pub title: String,
    /// Free text, conventionally "City, Area".
    pub location: String,
    /// Derived from `location`; may be empty.
    pub city: String,
    pub area: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_text: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
    pub owner_email: Option<String>,
}

impl JobListing {
    /// City used by the region filter.
    pub fn region_city(&self) -> &str {
        effective_city(Some(self.city.as_str()), &self.location)
    }

    /// First photo, shown on the card.
    pub fn cover_photo(&self) -> Option<&PhotoRef> {
        self.photos.first()
    }
}

/// Input for posting a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewJob {
    pub shop_name: String,
    pub location: String,
    /// Defaults to full time.
    pub job_type: Option<JobType>,
    pub salary_text: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
    pub owner_email: Option<String>,
}

/// Partial update for a job listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct JobPatch {
    pub shop_name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_text: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub photos: Option<Vec<PhotoRef>>,
}

impl JobPatch {
    /// Sets the location together with the city/area derived from it.
    pub fn relocate(mut self, location: &str) -> Self {
        let parsed = ParsedLocation::parse(location);
        self.location = Some(location.trim().to_string());
        self.city = Some(parsed.city);
        self.area = Some(parsed.area);
        self
    }
}

impl Patchable for JobListing {
    type Patch = JobPatch;

    fn apply(&mut self, patch: JobPatch) {
        if let Some(v) = patch.shop_name {
            self.shop_name = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.area {
            self.area = v;
        }
        if let Some(v) = patch.job_type {
            self.job_type = v;
        }
        if let Some(v) = patch.salary_text {
            self.salary_text = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.photos {
            self.photos = capped(v, MAX_JOB_PHOTOS);
        }
    }
}

impl Entity for JobListing {
    type Draft = NewJob;
    const KIND: &'static str = "job";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: NewJob, _now: DateTime<Utc>) -> Self {
        let location = draft.location.trim().to_string();
        let parsed = ParsedLocation::parse(&location);
        JobListing {
            id,
            shop_name: draft.shop_name.trim().to_string(),
            title: DEFAULT_JOB_TITLE.to_string(),
            location,
            city: parsed.city,
            area: parsed.area,
            job_type: draft.job_type.unwrap_or_default(),
            salary_text: draft.salary_text.trim().to_string(),
            description: draft.description.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            photos: capped(draft.photos, MAX_JOB_PHOTOS),
            owner_email: trimmed_opt(draft.owner_email),
        }
    }
}

// =============================================================================
// Barber Profile
// =============================================================================

/// A barber advertising themselves for work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BarberProfile {
    pub id: String,
    pub name: String,
    pub city: Region,
    pub area: String,
    /// Years of experience.
    pub years: u32,
    /// Ordered set; no duplicates.
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub contact: ContactInfo,
    pub available: bool,
    /// `None` renders the default brand avatar.
    pub avatar: Option<PhotoRef>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub owner_email: Option<String>,
}

impl BarberProfile {
    /// Skills shown on the barber card.
    pub fn headline_skills(&self) -> &[String] {
        let n = self.skills.len().min(CARD_SKILL_LIMIT);
        &self.skills[..n]
    }
}

/// Input for adding a barber profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewBarber {
    pub name: String,
    pub city: Region,
    pub area: Option<String>,
    pub years: Option<u32>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub contact_by: ContactPreference,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub available: bool,
    pub photo: Option<PhotoRef>,
    pub owner_email: Option<String>,
}

impl NewBarber {
    /// A draft with only the required fields set.
    pub fn new(name: impl Into<String>, city: Region) -> Self {
        NewBarber {
            name: name.into(),
            city,
            area: None,
            years: None,
            skills: Vec::new(),
            bio: None,
            contact_by: ContactPreference::default(),
            email: None,
            phone: None,
            available: true,
            photo: None,
            owner_email: None,
        }
    }
}

/// Partial update for a barber profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BarberPatch {
    pub name: Option<String>,
    pub city: Option<Region>,
    pub area: Option<String>,
    pub years: Option<u32>,
    pub skills: Option<Vec<String>>,
    /// An empty bio clears it.
    pub bio: Option<String>,
    pub contact: Option<ContactInfo>,
    pub available: Option<bool>,
    /// `Some(None)` drops back to the default avatar.
    #[serde(default)]
    pub avatar: Option<Option<PhotoRef>>,
}

impl Patchable for BarberProfile {
    type Patch = BarberPatch;

    fn apply(&mut self, patch: BarberPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.area {
            self.area = v;
        }
        if let Some(v) = patch.years {
            self.years = v;
        }
        if let Some(v) = patch.skills {
            self.skills = skill_set(v);
        }
        if let Some(v) = patch.bio {
            self.bio = trimmed_opt(Some(v));
        }
        if let Some(v) = patch.contact {
            self.contact = v;
        }
        if let Some(v) = patch.available {
            self.available = v;
        }
        if let Some(v) = patch.avatar {
            self.avatar = v;
        }
    }
}

impl Entity for BarberProfile {
    type Draft = NewBarber;
    const KIND: &'static str = "barber";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: NewBarber, now: DateTime<Utc>) -> Self {
        BarberProfile {
            id,
            name: draft.name.trim().to_string(),
            city: draft.city,
            area: trimmed_opt(draft.area).unwrap_or_default(),
            years: draft.years.unwrap_or(0),
            skills: skill_set(draft.skills),
            bio: trimmed_opt(draft.bio),
            contact: ContactInfo {
                email: trimmed_opt(draft.email),
                phone: trimmed_opt(draft.phone),
                via_email: draft.contact_by.email,
                via_phone: draft.contact_by.phone,
            },
            available: draft.available,
            avatar: draft.photo,
            created_at: now,
            owner_email: trimmed_opt(draft.owner_email),
        }
    }
}

// =============================================================================
// Shop Listing
// =============================================================================

/// A barber shop offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopListing {
    pub id: String,
    pub name: String,
    #[serde(rename = "priceGBP")]
    pub price: Gbp,
    pub location: String,
    pub city: String,
    pub area: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
    pub chairs: Option<u32>,
    pub owner_email: Option<String>,
}

impl ShopListing {
    /// City used by the region filter.
    pub fn region_city(&self) -> &str {
        effective_city(Some(self.city.as_str()), &self.location)
    }

    /// First photo, shown on the card.
    pub fn cover_photo(&self) -> Option<&PhotoRef> {
        self.photos.first()
    }
}

/// Input for listing a shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewShop {
    pub name: String,
    #[serde(rename = "priceGBP")]
    pub price: Gbp,
    pub location: String,
    pub description: String,
    pub phone: String,
    pub photos: Vec<PhotoRef>,
    pub chairs: Option<u32>,
    pub owner_email: Option<String>,
}

/// Partial update for a shop listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopPatch {
    pub name: Option<String>,
    #[serde(rename = "priceGBP")]
    pub price: Option<Gbp>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub photos: Option<Vec<PhotoRef>>,
    pub chairs: Option<u32>,
}

impl ShopPatch {
    /// Sets the location together with the city/area derived from it.
    pub fn relocate(mut self, location: &str) -> Self {
        let parsed = ParsedLocation::parse(location);
        self.location = Some(location.trim().to_string());
        self.city = Some(parsed.city);
        self.area = Some(parsed.area);
        self
    }
}

impl Patchable for ShopListing {
    type Patch = ShopPatch;

    fn apply(&mut self, patch: ShopPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.area {
            self.area = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.photos {
            self.photos = capped(v, MAX_SHOP_PHOTOS);
        }
        if let Some(v) = patch.chairs {
            self.chairs = Some(v);
        }
    }
}

impl Entity for ShopListing {
    type Draft = NewShop;
    const KIND: &'static str = "shop";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: NewShop, _now: DateTime<Utc>) -> Self {
        let location = draft.location.trim().to_string();
        let parsed = ParsedLocation::parse(&location);
        ShopListing {
            id,
            name: draft.name.trim().to_string(),
            price: draft.price,
            location,
            city: parsed.city,
            area: parsed.area,
            description: draft.description.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            photos: capped(draft.photos, MAX_SHOP_PHOTOS),
            chairs: draft.chairs,
            owner_email: trimmed_opt(draft.owner_email),
        }
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// The signed-in user's own profile. There is exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub photo: Option<PhotoRef>,
}

/// Partial update for the user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` removes the photo.
    #[serde(default)]
    pub photo: Option<Option<PhotoRef>>,
}

impl Patchable for UserProfile {
    type Patch = UserPatch;

    fn apply(&mut self, patch: UserPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.photo {
            self.photo = v;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
