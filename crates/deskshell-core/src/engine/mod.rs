//! Desktop shell coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and operations
//! - `input`: Pointer event handling and drag operations
//! - `rendering`: Read model for the presentation layer

mod windows;
mod input;
mod rendering;

use tracing::debug;

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::input::InputRouter;
use crate::math::Size;
use crate::store::{RedirectRule, WindowStore};
use crate::viewport::Viewport;

pub use rendering::{ShellSnapshot, WindowView};

/// Desktop shell coordinating all window components
///
/// This is the main entry point for shell operations, managing:
/// - Viewport (screen size and reserved top strip)
/// - Window store (window lifecycle, focus, z-order, snap state)
/// - Input router (the single drag/resize session)
/// - App registry (launch profiles, from the config)
pub struct DesktopShell {
    pub(crate) config: ShellConfig,
    pub(crate) viewport: Viewport,
    pub(crate) store: WindowStore,
    pub(crate) input: InputRouter,
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopShell {
    /// Create a shell with the default configuration
    pub fn new() -> Self {
        Self::build(ShellConfig::default())
    }

    /// Create a shell from a validated configuration
    pub fn with_config(config: ShellConfig) -> ShellResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a shell from a JSON configuration
    pub fn from_json(json: &str) -> ShellResult<Self> {
        Self::with_config(ShellConfig::from_json(json)?)
    }

    fn build(config: ShellConfig) -> Self {
        let viewport = Viewport {
            top_reserved: config.top_reserved_height,
            ..Viewport::default()
        };
        Self {
            store: WindowStore::with_config(&config),
            viewport,
            input: InputRouter::new(),
            config,
        }
    }

    /// Initialize the shell with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport.screen_size = Size::new(width, height);
        debug!(width, height, "shell initialized");
    }

    /// Resize the viewport
    ///
    /// Maximized and snapped windows follow automatically since their
    /// geometry is derived from the viewport on every read. Floating
    /// windows keep their rect.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.screen_size = Size::new(width, height);
        debug!(width, height, "viewport resized");
    }

    /// Register an additional open-request redirect
    pub fn add_redirect(&mut self, rule: Box<dyn RedirectRule>) {
        self.store.add_redirect(rule);
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Window store (read-only; mutate through the shell)
    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }
}
