//! TinyMCE editor customization.
//!
//! Each function mirrors one editor filter and works on plain values:
//! the stylesheet list, the second toolbar row, and the settings object that
//! is handed to TinyMCE on init. The settings object is treated as opaque
//! JSON apart from the keys touched here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Toolbar button that opens the "Styles" dropdown.
pub const STYLE_SELECT_BUTTON: &str = "styleselect";

/// Settings key holding `Title=classes;` pairs for the simple dropdown.
pub const SIMPLE_STYLES_KEY: &str = "theme_advanced_styles";

/// Settings key holding the JSON-encoded advanced style rules.
pub const STYLE_FORMATS_KEY: &str = "style_formats";

/// Path of the editor stylesheet relative to the theme URI.
pub const EDITOR_STYLESHEET: &str = "/assets/css/editor.css";

/// Errors raised while updating editor settings.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The style rules could not be encoded.
    #[error("failed to encode style formats: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One entry of the advanced "Styles" dropdown.
///
/// See TinyMCE's `formats` configuration for the meaning of each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleFormat {
    /// Label shown in the dropdown.
    pub title: String,
    /// Inline element to create or modify, e.g. `span`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<String>,
    /// Block element to create or modify, e.g. `div`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    /// Only apply to elements matching this CSS selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Space-separated classes to add.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    /// Inline CSS properties to add.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    /// HTML attributes to add.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Always create a new element instead of merging similar ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    /// Treat the element as a container for other blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<bool>,
}

/// Adds the theme's editor stylesheet to a comma-separated stylesheet list.
#[must_use]
pub fn append_stylesheet(existing: &str, theme_uri: &str) -> String {
    let stylesheet = format!("{}{EDITOR_STYLESHEET}", theme_uri.trim_end_matches('/'));
    if existing.is_empty() {
        stylesheet
    } else {
        format!("{existing},{stylesheet}")
    }
}

/// Puts the "Styles" dropdown at the front of a toolbar row.
#[must_use]
pub fn add_style_select(mut buttons: Vec<String>) -> Vec<String> {
    buttons.insert(0, STYLE_SELECT_BUTTON.to_string());
    buttons
}

/// Appends `Title=classes` pairs to the simple styles setting.
///
/// An existing non-empty value is kept and separated with `;`.
pub fn apply_simple_styles(settings: &mut Map<String, Value>, classes: &[(String, String)]) {
    let mut styles = match settings.get(SIMPLE_STYLES_KEY) {
        Some(Value::String(existing)) if !existing.is_empty() => format!("{existing};"),
        _ => String::new(),
    };

    let pairs: String = classes
        .iter()
        .map(|(name, class)| format!("{name}={class};"))
        .collect();
    styles.push_str(pairs.trim_matches(|c: char| c == ';' || c == ' '));

    settings.insert(SIMPLE_STYLES_KEY.to_string(), Value::String(styles));
}

/// Stores the advanced style rules as a JSON string setting.
///
/// # Errors
///
/// Returns [`EditorError::Encode`] if the rules cannot be serialized.
pub fn apply_style_formats(
    settings: &mut Map<String, Value>,
    formats: &[StyleFormat],
) -> Result<(), EditorError> {
    let encoded = serde_json::to_string(formats)?;
    settings.insert(STYLE_FORMATS_KEY.to_string(), Value::String(encoded));
    Ok(())
}

/// Classes offered by the simple dropdown.
#[must_use]
pub fn default_simple_styles() -> Vec<(String, String)> {
    vec![("Test".to_string(), "warnme".to_string())]
}

/// Style rules offered by the advanced dropdown.
#[must_use]
pub fn default_style_formats() -> Vec<StyleFormat> {
    vec![
        StyleFormat {
            title: "Text: Cross out".to_string(),
            inline: Some("span".to_string()),
            classes: Some("strike-through".to_string()),
            ..StyleFormat::default()
        },
        StyleFormat {
            title: "Image: 50% Width".to_string(),
            selector: Some("img".to_string()),
            classes: Some("half-width".to_string()),
            ..StyleFormat::default()
        },
        StyleFormat {
            title: "Warning Box".to_string(),
            block: Some("div".to_string()),
            classes: Some("warning box".to_string()),
            exact: Some(true),
            wrapper: Some(true),
            ..StyleFormat::default()
        },
        StyleFormat {
            title: "Red Uppercase Text".to_string(),
            inline: Some("span".to_string()),
            styles: BTreeMap::from([
                ("color".to_string(), "#ff0000".to_string()),
                ("fontWeight".to_string(), "bold".to_string()),
                ("textTransform".to_string(), "uppercase".to_string()),
            ]),
            ..StyleFormat::default()
        },
    ]
}
