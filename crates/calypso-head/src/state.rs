//! Document-head state and its read-only accessors.

use calypso_site::Site;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::actions::HeadAction;

/// Read-only view of application state used by middleware.
///
/// Middleware never owns state; it receives `&dyn StateReader` and must not
/// assume any field is populated.
pub trait StateReader {
    /// Base title of the current screen.
    fn title(&self) -> &str;
    fn unread_count(&self) -> Option<u32>;
    /// Tag of the active top-level UI area (e.g. `"sites"`, `"reader"`).
    fn group_name(&self) -> Option<&str>;
    fn site(&self, id: u64) -> Option<&Site>;
    fn selected_site(&self) -> Option<&Site>;
}

/// In-memory state updated by [`HeadState::reduce`].
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct HeadState {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub unread_count: Option<u32>,
    #[serde(default)]
    pub selected_site_id: Option<u64>,
    #[serde(default)]
    pub group_name: Option<String>,
    /// Known sites, looked up by `ID`.
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl HeadState {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid state: {e}"))
    }

    /// Apply `action` to the state.
    pub fn reduce(&mut self, action: &HeadAction) {
        match action {
            HeadAction::TitleSet { title } => self.title.clone_from(title),
            HeadAction::UnreadCountSet { count } => self.unread_count = Some(*count),
            HeadAction::SelectedSiteSet { site_id } => self.selected_site_id = *site_id,
            HeadAction::GroupSet { group } => self.group_name.clone_from(group),
            HeadAction::SitesReceived { sites } => {
                for site in sites {
                    self.upsert_site(site.clone());
                }
            }
        }
    }

    fn upsert_site(&mut self, site: Site) {
        let Some(id) = site.id else {
            warn!("ignoring received site without an ID");
            return;
        };
        match self.sites.iter_mut().find(|s| s.id == Some(id)) {
            Some(existing) => *existing = site,
            None => self.sites.push(site),
        }
    }
}

impl StateReader for HeadState {
    fn title(&self) -> &str {
        &self.title
    }

    fn unread_count(&self) -> Option<u32> {
        self.unread_count
    }

    fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    fn site(&self, id: u64) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == Some(id))
    }

    fn selected_site(&self) -> Option<&Site> {
        self.selected_site_id.and_then(|id| self.site(id))
    }
}
