//! Editor settings DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::service::EditorSettings;

/// Query parameters for `GET /api/v1/editor/settings`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EditorQuery {
    /// Existing comma-separated content stylesheets.
    #[serde(default)]
    pub content_css: String,
    /// Existing second-row buttons, comma-separated.
    #[serde(default)]
    pub toolbar2: String,
}

impl EditorQuery {
    /// Buttons parsed from the comma-separated list.
    #[must_use]
    pub fn buttons(&self) -> Vec<String> {
        self.toolbar2
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Response body for the editor settings endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct EditorSettingsResponse {
    /// Content stylesheets including the theme's editor stylesheet.
    pub content_css: String,
    /// Second toolbar row with the styles dropdown first.
    pub toolbar2: Vec<String>,
    /// TinyMCE init settings.
    #[schema(value_type = Object)]
    pub settings: Map<String, Value>,
}

impl From<EditorSettings> for EditorSettingsResponse {
    fn from(settings: EditorSettings) -> Self {
        Self {
            content_css: settings.content_css,
            toolbar2: settings.toolbar2,
            settings: settings.settings,
        }
    }
}
