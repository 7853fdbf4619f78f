//! # OAuth Configuration
//!
//! Google client ids per platform, read from the `[auth.google]` section
//! of the app config and overridable from the environment.
//!
//! ```toml
//! [auth.google]
//! expo_client_id = "123-expo.apps.googleusercontent.com"
//! ios_client_id = "123-ios.apps.googleusercontent.com"
//! android_client_id = "123-android.apps.googleusercontent.com"
//! web_client_id = "123-web.apps.googleusercontent.com"
//! ```
//!
//! ## Environment Overrides
//! | Variable | Field |
//! |---|---|
//! | `BARBERHUB_GOOGLE_EXPO_CLIENT_ID` | `expo_client_id` |
//! | `BARBERHUB_GOOGLE_IOS_CLIENT_ID` | `ios_client_id` |
//! | `BARBERHUB_GOOGLE_ANDROID_CLIENT_ID` | `android_client_id` |
//! | `BARBERHUB_GOOGLE_WEB_CLIENT_ID` | `web_client_id` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::Platform;

/// `[auth]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub google: GoogleClientIds,
}

/// OAuth client id for each platform Google issues one for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleClientIds {
    pub expo_client_id: Option<String>,
    pub ios_client_id: Option<String>,
    pub android_client_id: Option<String>,
    pub web_client_id: Option<String>,
}

impl GoogleClientIds {
    /// Client id for `platform`; blank values count as missing.
    pub fn for_platform(&self, platform: Platform) -> Option<&str> {
        let id = match platform {
            Platform::Expo => &self.expo_client_id,
            Platform::Ios => &self.ios_client_id,
            Platform::Android => &self.android_client_id,
            Platform::Web => &self.web_client_id,
        };
        id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Platforms with a usable client id.
    pub fn configured_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.for_platform(*p).is_some())
            .collect()
    }
}

impl OAuthConfig {
    /// Applies `BARBERHUB_GOOGLE_*_CLIENT_ID` variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let google = &mut self.google;
        let slots = [
            ("BARBERHUB_GOOGLE_EXPO_CLIENT_ID", &mut google.expo_client_id),
            ("BARBERHUB_GOOGLE_IOS_CLIENT_ID", &mut google.ios_client_id),
            ("BARBERHUB_GOOGLE_ANDROID_CLIENT_ID", &mut google.android_client_id),
            ("BARBERHUB_GOOGLE_WEB_CLIENT_ID", &mut google.web_client_id),
        ];
        for (name, slot) in slots {
            if let Some(value) = lookup(name) {
                debug!(variable = name, "OAuth client id overridden from environment");
                *slot = Some(value);
            }
        }
    }
}
