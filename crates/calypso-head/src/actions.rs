//! Actions dispatched through the [`Store`](crate::store::Store).
//!
//! The JSON form is tagged by `type`, matching the action objects the web
//! client dispatches:
//!
//! ```json
//! { "type": "DOCUMENT_HEAD_TITLE_SET", "title": "Reader" }
//! { "type": "DOCUMENT_HEAD_UNREAD_COUNT_SET", "count": 3 }
//! { "type": "SELECTED_SITE_SET", "siteId": 2916284 }
//! ```

use calypso_site::Site;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum HeadAction {
    /// The current screen changed its base title.
    #[serde(rename = "DOCUMENT_HEAD_TITLE_SET")]
    TitleSet {
        #[serde(default)]
        title: String,
    },
    /// The number of unread items shown in the title changed.
    #[serde(rename = "DOCUMENT_HEAD_UNREAD_COUNT_SET")]
    UnreadCountSet {
        #[serde(default)]
        count: u32,
    },
    /// A site was selected. A missing id selects nothing.
    #[serde(rename = "SELECTED_SITE_SET")]
    SelectedSiteSet {
        #[serde(rename = "siteId", default)]
        site_id: Option<u64>,
    },
    /// The active top-level UI area changed.
    #[serde(rename = "SECTION_GROUP_SET")]
    GroupSet {
        #[serde(default)]
        group: Option<String>,
    },
    /// Site records arrived from the API.
    #[serde(rename = "SITES_RECEIVE")]
    SitesReceived {
        #[serde(default)]
        sites: Vec<Site>,
    },
}

impl HeadAction {
    /// The action's wire `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            HeadAction::TitleSet { .. } => "DOCUMENT_HEAD_TITLE_SET",
            HeadAction::UnreadCountSet { .. } => "DOCUMENT_HEAD_UNREAD_COUNT_SET",
            HeadAction::SelectedSiteSet { .. } => "SELECTED_SITE_SET",
            HeadAction::GroupSet { .. } => "SECTION_GROUP_SET",
            HeadAction::SitesReceived { .. } => "SITES_RECEIVE",
        }
    }

    pub fn title_set(title: impl Into<String>) -> Self {
        HeadAction::TitleSet {
            title: title.into(),
        }
    }

    pub fn unread_count_set(count: u32) -> Self {
        HeadAction::UnreadCountSet { count }
    }

    pub fn selected_site_set(site_id: u64) -> Self {
        HeadAction::SelectedSiteSet {
            site_id: Some(site_id),
        }
    }

    pub fn group_set(group: impl Into<String>) -> Self {
        HeadAction::GroupSet {
            group: Some(group.into()),
        }
    }

    /// Parse a JSON array of actions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid action list: {e}"))
    }
}
