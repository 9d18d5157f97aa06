//! Per-app launch profiles
//!
//! Launchers only know an app id. The registry supplies the title, the size
//! to open at and the capability flags, so nothing downstream ever has to
//! compare app ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::math::Size;
use crate::window::{Capabilities, OpenRequest};

/// Size used for apps without a profile
pub const FALLBACK_WINDOW_SIZE: Size = Size::new(640.0, 480.0);

/// How an app's window is opened
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProfile {
    pub title: String,
    pub default_size: Size,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl AppProfile {
    pub fn new(title: &str, width: f32, height: f32) -> Self {
        Self {
            title: title.to_string(),
            default_size: Size::new(width, height),
            capabilities: Capabilities::default(),
        }
    }

    /// Profile of a fixed-size app (no resize, no minimize)
    pub fn fixed(title: &str, width: f32, height: f32) -> Self {
        Self {
            capabilities: Capabilities::FIXED,
            ..Self::new(title, width, height)
        }
    }
}

/// App id → launch profile table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppRegistry {
    apps: BTreeMap<String, AppProfile>,
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles for the apps the shell ships with
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("terminal", AppProfile::new("Terminal", 720.0, 460.0));
        registry.register("notes", AppProfile::new("Notes", 560.0, 500.0));
        registry.register("files", AppProfile::new("Files", 820.0, 540.0));
        registry.register("music", AppProfile::new("Music", 800.0, 520.0));
        registry.register("photos", AppProfile::new("Photos", 860.0, 580.0));
        registry.register("settings", AppProfile::new("Settings", 720.0, 520.0));
        registry.register("snake", AppProfile::fixed("Snake", 420.0, 480.0));
        registry.register("tetris", AppProfile::fixed("Tetris", 440.0, 640.0));
        registry.register("minesweeper", AppProfile::fixed("Minesweeper", 380.0, 460.0));
        registry
    }

    /// Add or replace a profile
    pub fn register(&mut self, app_id: &str, profile: AppProfile) {
        self.apps.insert(app_id.to_string(), profile);
    }

    pub fn get(&self, app_id: &str) -> Option<&AppProfile> {
        self.apps.get(app_id)
    }

    /// Open request for an app; unknown apps use their id as title
    pub fn request_for(&self, app_id: &str) -> OpenRequest {
        match self.get(app_id) {
            Some(profile) => OpenRequest::new(app_id, profile.title.clone(), profile.default_size)
                .with_capabilities(profile.capabilities),
            None => OpenRequest::new(app_id, app_id, FALLBACK_WINDOW_SIZE),
        }
    }
}
