//! A serializable snapshot of every predicate for one site.

use serde::Serialize;

use crate::file_mods::{
    FileModAction, FileModTier, can_autoupdate_core, can_autoupdate_files, can_update_files,
    file_mod_block, file_mod_disable_reasons,
};
use crate::network::{has_custom_domain, is_main_network_site, without_http};
use crate::options::{
    default_category, default_post_format, gmt_offset, is_jetpack, is_permalink_editable,
    timezone,
};
use crate::site::Site;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SiteReport {
    pub display_name: Option<String>,
    pub domain: Option<String>,
    pub unmapped_domain: Option<String>,
    pub has_custom_domain: Option<bool>,
    pub is_jetpack: bool,
    pub is_main_network_site: bool,
    pub is_permalink_editable: bool,
    pub timezone: Option<String>,
    pub gmt_offset: Option<String>,
    pub default_category: Option<u64>,
    pub default_post_format: Option<String>,
    pub can_update_files: bool,
    pub can_autoupdate_files: bool,
    pub can_autoupdate_core: bool,
    /// First rule refusing the requested action's tier, if any.
    pub blocked_by: Option<&'static str>,
    pub action: FileModAction,
    pub disable_reasons: Option<Vec<&'static str>>,
}

impl SiteReport {
    /// Evaluate every predicate against `site`, with file-mod reasons for
    /// `action`.
    pub fn new(site: &Site, action: FileModAction) -> Self {
        let site = Some(site);
        let tier = match action {
            FileModAction::ModifyFiles => FileModTier::UpdateFiles,
            FileModAction::AutoupdateFiles => FileModTier::AutoupdateFiles,
            FileModAction::AutoupdateCore => FileModTier::AutoupdateCore,
        };
        Self {
            display_name: site.and_then(Site::display_name).map(String::from),
            domain: without_http(site.and_then(|s| s.url.as_deref())).map(String::from),
            unmapped_domain: without_http(
                site.and_then(|s| s.options.as_ref())
                    .and_then(|o| o.unmapped_url.as_deref()),
            )
            .map(String::from),
            has_custom_domain: has_custom_domain(site),
            is_jetpack: is_jetpack(site),
            is_main_network_site: is_main_network_site(site),
            is_permalink_editable: is_permalink_editable(site),
            timezone: timezone(site).map(String::from),
            gmt_offset: gmt_offset(site).map(ToString::to_string),
            default_category: default_category(site),
            default_post_format: default_post_format(site).map(String::from),
            can_update_files: can_update_files(site),
            can_autoupdate_files: can_autoupdate_files(site),
            can_autoupdate_core: can_autoupdate_core(site),
            blocked_by: file_mod_block(site, tier),
            action,
            disable_reasons: file_mod_disable_reasons(site, action),
        }
    }

    /// Human-readable multi-line rendering.
    pub fn to_text(&self) -> String {
        fn opt<T: ToString>(v: &Option<T>) -> String {
            v.as_ref().map_or_else(|| "-".to_string(), ToString::to_string)
        }

        let mut out = String::new();
        let mut line = |label: &str, value: String| {
            out.push_str(&format!("{label:<22} {value}\n"));
        };
        line("name", opt(&self.display_name));
        line("domain", opt(&self.domain));
        line("unmapped domain", opt(&self.unmapped_domain));
        line("custom domain", opt(&self.has_custom_domain));
        line("jetpack", self.is_jetpack.to_string());
        line("main network site", self.is_main_network_site.to_string());
        line("permalink editable", self.is_permalink_editable.to_string());
        line("timezone", opt(&self.timezone));
        line("gmt offset", opt(&self.gmt_offset));
        line("default category", opt(&self.default_category));
        line("default post format", opt(&self.default_post_format));
        line("can update files", self.can_update_files.to_string());
        line("can autoupdate files", self.can_autoupdate_files.to_string());
        line("can autoupdate core", self.can_autoupdate_core.to_string());
        line(&format!("{} blocked by", self.action), opt(&self.blocked_by));
        match &self.disable_reasons {
            Some(reasons) if !reasons.is_empty() => {
                for reason in reasons {
                    line("reason", (*reason).to_string());
                }
            }
            _ => {}
        }
        out
    }
}
