//! Open-request redirects
//!
//! Some app ids never get a window of their own. Opening the "resume" app,
//! for instance, shows the resume document in a read-only preview window.
//! Rules are checked in registration order and the first match wins; the
//! rewritten request is not redirected again.

use serde::{Deserialize, Serialize};
use crate::math::Size;
use crate::window::{OpenRequest, PreviewData};

/// App id every preview window is opened under
pub const PREVIEW_APP_ID: &str = "preview";

/// Rewrites an open request before the store handles it
pub trait RedirectRule {
    /// Replacement request, or `None` to leave the request alone
    fn redirect(&self, request: &OpenRequest) -> Option<OpenRequest>;
}

/// Always open `app_id` as a preview of a fixed document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPreview {
    pub app_id: String,
    pub preview: PreviewData,
    pub size: Size,
}

impl DocumentPreview {
    pub fn new(app_id: &str, source: &str, title: &str, size: Size) -> Self {
        Self {
            app_id: app_id.to_string(),
            preview: PreviewData {
                source: source.to_string(),
                title: title.to_string(),
            },
            size,
        }
    }

    /// The resume document shown from the desktop icon and the terminal
    pub fn resume() -> Self {
        Self::new("resume", "/documents/resume.pdf", "Resume.pdf", Size::new(760.0, 900.0))
    }
}

impl RedirectRule for DocumentPreview {
    fn redirect(&self, request: &OpenRequest) -> Option<OpenRequest> {
        if request.app_id != self.app_id || request.preview.is_some() {
            return None;
        }
        Some(OpenRequest {
            app_id: PREVIEW_APP_ID.to_string(),
            title: self.preview.title.clone(),
            default_size: self.size,
            preview: Some(self.preview.clone()),
            initial_data: None,
            origin_rect: request.origin_rect,
            dock_rect: request.dock_rect,
            capabilities: Default::default(),
        })
    }
}

/// Ordered set of redirect rules
#[derive(Default)]
pub struct RedirectRegistry {
    rules: Vec<Box<dyn RedirectRule>>,
}

impl RedirectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; earlier rules take precedence
    pub fn add(&mut self, rule: Box<dyn RedirectRule>) {
        self.rules.push(rule);
    }

    /// First matching replacement for `request`
    pub fn resolve(&self, request: &OpenRequest) -> Option<OpenRequest> {
        self.rules.iter().find_map(|rule| rule.redirect(request))
    }
}
