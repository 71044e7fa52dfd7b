//! File-modification permissions.
//!
//! Jetpack sites report why WordPress refuses to touch files through
//! `options.file_mod_disabled`, an ordered list of clue codes. This module
//! maps those clues to human-readable reasons and evaluates the three
//! permission tiers built on them:
//!
//! | Tier | Requires | Blocked by |
//! |------|----------|------------|
//! | [`FileModTier::UpdateFiles`] | none | missing site, old Jetpack, not main network site, multi-network, `disallow_file_mods`, `has_no_file_system_write_access` |
//! | [`FileModTier::AutoupdateFiles`] | `UpdateFiles` | `automatic_updater_disabled` |
//! | [`FileModTier::AutoupdateCore`] | `AutoupdateFiles` | `automatic_updater_disabled` |
//!
//! `AutoupdateCore` repeats the `automatic_updater_disabled` check instead
//! of looking at `wp_auto_update_core_disabled`. The clue is still reported
//! as a reason by [`file_mod_disable_reasons`] for
//! [`FileModAction::AutoupdateCore`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::network::is_main_network_site;
use crate::site::Site;

// ── Actions and clues ──────────────────────────────────────────────

/// What the caller wants to do with the site's files.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FileModAction {
    #[default]
    ModifyFiles,
    AutoupdateFiles,
    AutoupdateCore,
}

impl FileModAction {
    pub const ALL: [FileModAction; 3] = [
        FileModAction::ModifyFiles,
        FileModAction::AutoupdateFiles,
        FileModAction::AutoupdateCore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileModAction::ModifyFiles => "modifyFiles",
            FileModAction::AutoupdateFiles => "autoupdateFiles",
            FileModAction::AutoupdateCore => "autoupdateCore",
        }
    }
}

impl fmt::Display for FileModAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileModAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileModAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                format!("unknown file action '{s}' (expected modifyFiles, autoupdateFiles or autoupdateCore)")
            })
    }
}

/// A known `file_mod_disabled` clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    HasNoFileSystemWriteAccess,
    DisallowFileMods,
    AutomaticUpdaterDisabled,
    WpAutoUpdateCoreDisabled,
}

impl Clue {
    pub const ALL: [Clue; 4] = [
        Clue::HasNoFileSystemWriteAccess,
        Clue::DisallowFileMods,
        Clue::AutomaticUpdaterDisabled,
        Clue::WpAutoUpdateCoreDisabled,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Clue::HasNoFileSystemWriteAccess => "has_no_file_system_write_access",
            Clue::DisallowFileMods => "disallow_file_mods",
            Clue::AutomaticUpdaterDisabled => "automatic_updater_disabled",
            Clue::WpAutoUpdateCoreDisabled => "wp_auto_update_core_disabled",
        }
    }

    /// Parse a clue code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Clue::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Actions this clue explains a refusal for.
    pub fn applicable_actions(self) -> &'static [FileModAction] {
        use FileModAction::*;
        match self {
            Clue::HasNoFileSystemWriteAccess | Clue::DisallowFileMods => {
                &[ModifyFiles, AutoupdateFiles, AutoupdateCore]
            }
            Clue::AutomaticUpdaterDisabled => &[AutoupdateFiles, AutoupdateCore],
            Clue::WpAutoUpdateCoreDisabled => &[AutoupdateCore],
        }
    }

    pub fn applies_to(self, action: FileModAction) -> bool {
        self.applicable_actions().contains(&action)
    }

    pub fn reason(self) -> &'static str {
        match self {
            Clue::HasNoFileSystemWriteAccess => {
                "The file permissions on this host prevent editing files."
            }
            Clue::DisallowFileMods => {
                "File modifications are explicitly disabled by a site administrator."
            }
            Clue::AutomaticUpdaterDisabled => {
                "Any autoupdates are explicitly disabled by a site administrator."
            }
            Clue::WpAutoUpdateCoreDisabled => {
                "Core autoupdates are explicitly disabled by a site administrator."
            }
        }
    }
}

/// Reasons `action` is disabled on `site`, one per applicable clue, in clue
/// order.
///
/// Returns `None` when the site carries no `file_mod_disabled` list at all.
/// Unknown clues and clues irrelevant to `action` are skipped, so the result
/// may be empty.
pub fn file_mod_disable_reasons(
    site: Option<&Site>,
    action: FileModAction,
) -> Option<Vec<&'static str>> {
    let clues = site?.file_mod_clues()?;
    Some(
        clues
            .iter()
            .filter_map(|code| Clue::from_code(code))
            .filter(|clue| clue.applies_to(action))
            .map(Clue::reason)
            .collect(),
    )
}

// ── Permission tiers ───────────────────────────────────────────────

/// A named condition that refuses a tier when `blocks` returns true.
pub struct GateRule {
    pub name: &'static str,
    pub blocks: fn(&Site) -> bool,
}

fn lacks_options(site: &Site) -> bool {
    site.options.is_none()
}

fn below_minimum_jetpack(site: &Site) -> bool {
    !site.has_minimum_jetpack_version
}

fn not_main_network_site(site: &Site) -> bool {
    !is_main_network_site(Some(site))
}

fn multi_network(site: &Site) -> bool {
    site.options.as_ref().is_some_and(|o| o.is_multi_network)
}

fn file_mods_disallowed(site: &Site) -> bool {
    site.has_file_mod_clue(Clue::DisallowFileMods.code())
}

fn no_write_access(site: &Site) -> bool {
    site.has_file_mod_clue(Clue::HasNoFileSystemWriteAccess.code())
}

fn automatic_updater_disabled(site: &Site) -> bool {
    site.has_file_mod_clue(Clue::AutomaticUpdaterDisabled.code())
}

const UPDATE_FILES_RULES: &[GateRule] = &[
    GateRule {
        name: "minimum_jetpack_version",
        blocks: below_minimum_jetpack,
    },
    GateRule {
        name: "main_network_site",
        blocks: not_main_network_site,
    },
    GateRule {
        name: "options_present",
        blocks: lacks_options,
    },
    GateRule {
        name: "is_multi_network",
        blocks: multi_network,
    },
    GateRule {
        name: "disallow_file_mods",
        blocks: file_mods_disallowed,
    },
    GateRule {
        name: "has_no_file_system_write_access",
        blocks: no_write_access,
    },
];

const AUTOUPDATE_FILES_RULES: &[GateRule] = &[GateRule {
    name: "automatic_updater_disabled",
    blocks: automatic_updater_disabled,
}];

// Same clue as AUTOUPDATE_FILES_RULES; see the module docs.
const AUTOUPDATE_CORE_RULES: &[GateRule] = &[GateRule {
    name: "automatic_updater_disabled",
    blocks: automatic_updater_disabled,
}];

/// One step of the file permission chain.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileModTier {
    UpdateFiles,
    AutoupdateFiles,
    AutoupdateCore,
}

impl FileModTier {
    /// The tier that must pass before this one is considered.
    pub fn prerequisite(self) -> Option<FileModTier> {
        match self {
            FileModTier::UpdateFiles => None,
            FileModTier::AutoupdateFiles => Some(FileModTier::UpdateFiles),
            FileModTier::AutoupdateCore => Some(FileModTier::AutoupdateFiles),
        }
    }

    /// This tier's own rules, excluding its prerequisites.
    pub fn rules(self) -> &'static [GateRule] {
        match self {
            FileModTier::UpdateFiles => UPDATE_FILES_RULES,
            FileModTier::AutoupdateFiles => AUTOUPDATE_FILES_RULES,
            FileModTier::AutoupdateCore => AUTOUPDATE_CORE_RULES,
        }
    }
}

/// Why `tier` is refused for `site`, as the first blocking rule name.
///
/// Prerequisite tiers are checked first. Returns `None` when the tier is
/// allowed; a missing site is reported as `"site_present"`.
pub fn file_mod_block(site: Option<&Site>, tier: FileModTier) -> Option<&'static str> {
    let Some(site) = site else {
        return Some("site_present");
    };
    if let Some(blocked) = tier.prerequisite().and_then(|pre| file_mod_block(Some(site), pre)) {
        return Some(blocked);
    }
    let rule = tier.rules().iter().find(|rule| (rule.blocks)(site))?;
    debug!(tier = ?tier, rule = rule.name, "file modification tier blocked");
    Some(rule.name)
}

pub fn can_update_files(site: Option<&Site>) -> bool {
    file_mod_block(site, FileModTier::UpdateFiles).is_none()
}

pub fn can_autoupdate_files(site: Option<&Site>) -> bool {
    file_mod_block(site, FileModTier::AutoupdateFiles).is_none()
}

pub fn can_autoupdate_core(site: Option<&Site>) -> bool {
    file_mod_block(site, FileModTier::AutoupdateCore).is_none()
}
