//! Capability and configuration predicates over WordPress site records.
//!
//! A [`Site`] is whatever the REST API (or a cache, or a half-synced Jetpack
//! connection) gave us: any field may be missing, and the site itself may be
//! absent. Every predicate here therefore takes `Option<&Site>` and answers
//! with a "no information" value (`false`, `None`) instead of failing.
//!
//! # Where to find things
//!
//! - **Record shape:** [`Site`], [`SiteOptions`], [`SiteSettings`].
//! - **Capabilities and options:** [`user_can`], [`is_permalink_editable`],
//!   [`timezone`], [`gmt_offset`], [`default_category`],
//!   [`default_post_format`], [`is_jetpack`].
//! - **Domains and networks:** [`without_http`], [`has_custom_domain`],
//!   [`is_main_network_site`].
//! - **File modifications:** [`file_mod_disable_reasons`] and the
//!   [`can_update_files`] → [`can_autoupdate_files`] →
//!   [`can_autoupdate_core`] chain; [`file_mod_block`] names the rule that
//!   refused a tier.
//! - **Everything at once:** [`SiteReport`].
//!
//! ```ignore
//! use calypso_site::{Site, is_permalink_editable};
//!
//! let site = Site::from_json(r#"{"options":{"permalink_structure":"/%postname%/"}}"#)?;
//! assert!(is_permalink_editable(Some(&site)));
//! ```

pub mod file_mods;
pub mod network;
pub mod options;
pub mod report;
pub mod site;

pub use file_mods::{
    Clue, FileModAction, FileModTier, GateRule, can_autoupdate_core, can_autoupdate_files,
    can_update_files, file_mod_block, file_mod_disable_reasons,
};
pub use network::{has_custom_domain, is_main_network_site, without_http};
pub use options::{
    DefaultSource, default_category, default_post_format, default_source, gmt_offset, is_jetpack,
    is_permalink_editable, timezone, user_can,
};
pub use report::SiteReport;
pub use site::{GmtOffset, Site, SiteOptions, SiteSettings};
