//! # Media Picker Boundary
//!
//! The photo library lives outside the app. Forms talk to it through
//! [`MediaPicker`] and merge whatever comes back into their photo list,
//! capped by a [`PhotoBudget`].
//!
//! ```text
//!   form ──► request_permission ──denied──► AppError::PermissionDenied
//!                   │ granted
//!                   ▼
//!            pick(space left) ──cancelled──► photos unchanged
//!                   │ picked
//!                   ▼
//!            merge_photos(existing, picked, budget)
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use barberhub_core::forms::merge_photos;
use barberhub_core::{PhotoRef, MAX_AVATAR_PHOTOS, MAX_JOB_PHOTOS, MAX_SHOP_PHOTOS};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Outcome of a photo library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Access to the device photo library.
#[allow(async_fn_in_trait)]
pub trait MediaPicker: Send + Sync {
    async fn request_permission(&self) -> Permission;

    /// Lets the user choose up to `limit` photos. `None` when cancelled.
    async fn pick(&self, limit: usize) -> Option<Vec<PhotoRef>>;
}

/// How many photos each kind of form may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoBudget {
    Job,
    Shop,
    Avatar,
}

impl PhotoBudget {
    pub const fn max(&self) -> usize {
        match self {
            PhotoBudget::Job => MAX_JOB_PHOTOS,
            PhotoBudget::Shop => MAX_SHOP_PHOTOS,
            PhotoBudget::Avatar => MAX_AVATAR_PHOTOS,
        }
    }
}

/// Asks for photos and appends them to `existing` within the budget.
///
/// A denied permission leaves the photos alone and returns
/// [`AppError::PermissionDenied`]; a cancelled pick returns them unchanged.
pub async fn add_photos<P: MediaPicker>(
    picker: &P,
    existing: &[PhotoRef],
    budget: PhotoBudget,
) -> AppResult<Vec<PhotoRef>> {
    if picker.request_permission().await == Permission::Denied {
        info!(?budget, "photo library permission denied");
        return Err(AppError::PermissionDenied);
    }

    let space = budget.max().saturating_sub(existing.len());
    if space == 0 {
        debug!(?budget, "photo budget already full");
        return Ok(existing.to_vec());
    }

    match picker.pick(space).await {
        Some(picked) => {
            debug!(?budget, picked = picked.len(), "photos picked");
            Ok(merge_photos(existing, picked, budget.max()))
        }
        None => Ok(existing.to_vec()),
    }
}

/// Picks a single avatar, replacing `current` if one was chosen.
pub async fn pick_avatar<P: MediaPicker>(
    picker: &P,
    current: Option<PhotoRef>,
) -> AppResult<Option<PhotoRef>> {
    if picker.request_permission().await == Permission::Denied {
        info!("photo library permission denied for avatar");
        return Err(AppError::PermissionDenied);
    }
    let picked = picker
        .pick(PhotoBudget::Avatar.max())
        .await
        .and_then(|photos| photos.into_iter().next());
    Ok(picked.or(current))
}

// =============================================================================
// Scripted Picker
// =============================================================================

/// Picker that replays queued selections, for tests and the demo binary.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    permission: Permission,
    queue: Arc<Mutex<VecDeque<Option<Vec<PhotoRef>>>>>,
}

impl ScriptedPicker {
    pub fn granted() -> Self {
        ScriptedPicker {
            permission: Permission::Granted,
            queue: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn denied() -> Self {
        ScriptedPicker {
            permission: Permission::Denied,
            ..Self::granted()
        }
    }

    /// Queues the next selection. `None` behaves like a cancelled picker.
    pub fn push(&self, selection: Option<Vec<PhotoRef>>) -> &Self {
        self.queue.lock().push_back(selection);
        self
    }

    /// Queues a selection of `uris`.
    pub fn push_uris<I, S>(&self, uris: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Some(uris.into_iter().map(PhotoRef::new).collect()))
    }
}

impl MediaPicker for ScriptedPicker {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn pick(&self, limit: usize) -> Option<Vec<PhotoRef>> {
        let next = self.queue.lock().pop_front().flatten();
        next.map(|mut photos| {
            photos.truncate(limit);
            photos
        })
    }
}
