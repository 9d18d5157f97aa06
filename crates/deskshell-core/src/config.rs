//! Shell configuration
//!
//! Every field has a default, so a host can pass `{}` or only the values it
//! wants to change.

use serde::{Deserialize, Serialize};
use crate::apps::AppRegistry;
use crate::error::{ShellError, ShellResult};
use crate::math::Size;
use crate::store::DocumentPreview;

/// Tunables for layout, interaction and app launching
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Height of the top panel windows may never move under
    pub top_reserved_height: f32,
    /// Distance from a viewport edge that counts as "at the edge" while dragging
    pub edge_threshold: f32,
    /// Smallest size a window can be resized to
    pub min_window_size: Size,
    /// Diagonal offset between successively opened windows
    pub cascade_step: f32,
    /// Number of cascade steps before the offset starts over
    pub cascade_wrap: u32,
    /// Starting value of the shared z counter
    pub initial_z: u64,
    /// Apps that always open as read-only document previews
    pub document_previews: Vec<DocumentPreview>,
    /// Launch profiles
    pub apps: AppRegistry,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            top_reserved_height: 32.0,
            edge_threshold: 12.0,
            min_window_size: Size::new(200.0, 150.0),
            cascade_step: 30.0,
            cascade_wrap: 8,
            initial_z: 10,
            document_previews: vec![DocumentPreview::resume()],
            apps: AppRegistry::builtin(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the layout code cannot work with
    pub fn validate(&self) -> ShellResult<()> {
        if self.top_reserved_height.is_nan() || self.top_reserved_height < 0.0 {
            return Err(ShellError::InvalidConfig {
                field: "topReservedHeight",
                reason: "must not be negative",
            });
        }
        if self.edge_threshold.is_nan() || self.edge_threshold <= 0.0 {
            return Err(ShellError::InvalidConfig {
                field: "edgeThreshold",
                reason: "must be positive",
            });
        }
        if self.min_window_size.is_empty() {
            return Err(ShellError::InvalidConfig {
                field: "minWindowSize",
                reason: "width and height must be positive",
            });
        }
        if self.cascade_step.is_nan() || self.cascade_step < 0.0 {
            return Err(ShellError::InvalidConfig {
                field: "cascadeStep",
                reason: "must not be negative",
            });
        }
        if self.cascade_wrap == 0 {
            return Err(ShellError::InvalidConfig {
                field: "cascadeWrap",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
