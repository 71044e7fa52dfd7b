//! Title composition settings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings for [`DocumentTitleMiddleware`](crate::document_title::DocumentTitleMiddleware),
/// loadable from JSON.
///
/// # Example JSON
///
/// ```json
/// {
///   "product_name": "WordPress.com",
///   "site_specific_groups": ["sites", "editor"]
/// }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct HeadConfig {
    /// Suffix of every title, and the whole title when nothing else applies.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// UI groups in which the selected site's name is appended on title and
    /// unread-count changes.
    #[serde(default = "default_site_specific_groups")]
    pub site_specific_groups: Vec<String>,
}

fn default_product_name() -> String {
    "WordPress.com".to_string()
}

fn default_site_specific_groups() -> Vec<String> {
    vec!["sites".to_string(), "editor".to_string()]
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            site_specific_groups: default_site_specific_groups(),
        }
    }
}

impl HeadConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid head config: {e}"))
    }

    /// Load config from a JSON file. Returns the default config if the file
    /// doesn't exist or can't be parsed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                warn!("Failed to parse head config: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Whether `group` shows the selected site in the title.
    pub fn is_site_specific(&self, group: Option<&str>) -> bool {
        group.is_some_and(|g| self.site_specific_groups.iter().any(|s| s == g))
    }
}
