//! The site record as returned by the REST API.
//!
//! Every field is optional or defaulted: records arrive partially populated
//! (a freshly created site, a Jetpack site that has not synced its options,
//! a cached stub) and must still deserialize. Accessors in the sibling
//! modules turn missing data into `None` / `false` instead of failing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A hosted site and its configuration.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Site {
    #[serde(rename = "ID", default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    /// Capability name → whether the current user holds it.
    #[serde(default)]
    pub capabilities: Option<HashMap<String, bool>>,
    #[serde(default)]
    pub options: Option<SiteOptions>,
    /// Editable settings; when present they shadow the matching `options`.
    #[serde(default)]
    pub settings: Option<SiteSettings>,
    /// Absent and `false` mean different things to
    /// [`is_main_network_site`](crate::is_main_network_site).
    #[serde(default)]
    pub is_multisite: Option<bool>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub jetpack: bool,
    #[serde(
        rename = "hasMinimumJetpackVersion",
        default,
        deserialize_with = "null_as_false"
    )]
    pub has_minimum_jetpack_version: bool,
}

/// Read-only site options.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SiteOptions {
    #[serde(default)]
    pub permalink_structure: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub gmt_offset: Option<GmtOffset>,
    /// Ordered clue codes explaining why file modifications are disabled.
    /// Sites with nothing to report may send `false` instead of a list.
    #[serde(default, deserialize_with = "clue_list")]
    pub file_mod_disabled: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_multi_network: bool,
    #[serde(default)]
    pub unmapped_url: Option<String>,
    #[serde(default)]
    pub main_network_site: Option<String>,
    #[serde(default)]
    pub default_category: Option<u64>,
    #[serde(default)]
    pub default_post_format: Option<String>,
}

/// Editable site settings.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SiteSettings {
    #[serde(default)]
    pub default_category: Option<u64>,
    #[serde(default)]
    pub default_post_format: Option<String>,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClueList {
    List(Vec<String>),
    Flag(bool),
}

/// `file_mod_disabled` is a list of clues, or a falsy `false` / `null`.
fn clue_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<ClueList>::deserialize(deserializer)? {
        Some(ClueList::List(clues)) => Some(clues),
        Some(ClueList::Flag(_)) | None => None,
    })
}

/// UTC offset in hours. The API sends either a number or a numeric string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum GmtOffset {
    Hours(f64),
    Text(String),
}

impl GmtOffset {
    /// The offset in hours, if it parses as a number.
    pub fn hours(&self) -> Option<f64> {
        match self {
            GmtOffset::Hours(h) => Some(*h),
            GmtOffset::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for GmtOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GmtOffset::Hours(h) => write!(f, "{h}"),
            GmtOffset::Text(s) => f.write_str(s),
        }
    }
}

impl Site {
    /// Parse a site record from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid site record: {e}"))
    }

    /// Name shown to people: `name`, falling back to `domain`.
    ///
    /// Empty strings count as missing.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.domain.as_deref().filter(|d| !d.is_empty()))
    }

    /// The `file_mod_disabled` clue list, if the site reports one.
    pub fn file_mod_clues(&self) -> Option<&[String]> {
        self.options.as_ref()?.file_mod_disabled.as_deref()
    }

    /// Whether `clue` is listed in `file_mod_disabled`.
    pub fn has_file_mod_clue(&self, clue: &str) -> bool {
        self.file_mod_clues()
            .is_some_and(|clues| clues.iter().any(|c| c == clue))
    }
}
