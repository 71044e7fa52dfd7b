//! Capability and option lookups.

use std::sync::LazyLock;

use regex::Regex;

use crate::site::{GmtOffset, Site, SiteOptions, SiteSettings};

static POSTNAME_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/%postname%/?").expect("valid postname regex"));

/// Whether the current user holds `capability` on `site`.
pub fn user_can(capability: &str, site: Option<&Site>) -> bool {
    site.and_then(|s| s.capabilities.as_ref())
        .and_then(|caps| caps.get(capability))
        .copied()
        .unwrap_or(false)
}

/// Whether post slugs appear in the site's permalinks.
///
/// Only structures containing a `/%postname%` segment let authors edit the
/// slug; everything else (plain `?p=123`, date-only) does not.
pub fn is_permalink_editable(site: Option<&Site>) -> bool {
    match site
        .and_then(|s| s.options.as_ref())
        .and_then(|o| o.permalink_structure.as_deref())
    {
        Some(structure) if !structure.is_empty() => POSTNAME_SEGMENT.is_match(structure),
        _ => false,
    }
}

pub fn timezone(site: Option<&Site>) -> Option<&str> {
    site?.options.as_ref()?.timezone.as_deref()
}

pub fn gmt_offset(site: Option<&Site>) -> Option<&GmtOffset> {
    site?.options.as_ref()?.gmt_offset.as_ref()
}

pub fn is_jetpack(site: Option<&Site>) -> bool {
    site.is_some_and(|s| s.jetpack)
}

// ── Settings → options fallback ────────────────────────────────────

/// Where a default may be read from.
///
/// Sources are consulted in [`DEFAULT_SOURCES`] order and the first source
/// whose *container* exists answers, even if it lacks the field. A site with
/// `settings` but no `settings.default_category` therefore yields `None`
/// without looking at `options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    Settings,
    Options,
}

pub const DEFAULT_SOURCES: [DefaultSource; 2] = [DefaultSource::Settings, DefaultSource::Options];

struct DefaultField<T: ?Sized + 'static> {
    from_settings: fn(&SiteSettings) -> Option<&T>,
    from_options: fn(&SiteOptions) -> Option<&T>,
}

fn resolve_default<'a, T: ?Sized + 'static>(
    site: Option<&'a Site>,
    field: &DefaultField<T>,
) -> Option<&'a T> {
    let site = site?;
    for source in DEFAULT_SOURCES {
        match source {
            DefaultSource::Settings => {
                if let Some(settings) = &site.settings {
                    return (field.from_settings)(settings);
                }
            }
            DefaultSource::Options => {
                if let Some(options) = &site.options {
                    return (field.from_options)(options);
                }
            }
        }
    }
    None
}

/// The container that answers default lookups for `site`, if any.
pub fn default_source(site: Option<&Site>) -> Option<DefaultSource> {
    let site = site?;
    DEFAULT_SOURCES.into_iter().find(|source| match source {
        DefaultSource::Settings => site.settings.is_some(),
        DefaultSource::Options => site.options.is_some(),
    })
}

fn settings_category(s: &SiteSettings) -> Option<&u64> {
    s.default_category.as_ref()
}

fn options_category(o: &SiteOptions) -> Option<&u64> {
    o.default_category.as_ref()
}

fn settings_post_format(s: &SiteSettings) -> Option<&str> {
    s.default_post_format.as_deref()
}

fn options_post_format(o: &SiteOptions) -> Option<&str> {
    o.default_post_format.as_deref()
}

const DEFAULT_CATEGORY: DefaultField<u64> = DefaultField {
    from_settings: settings_category,
    from_options: options_category,
};

const DEFAULT_POST_FORMAT: DefaultField<str> = DefaultField {
    from_settings: settings_post_format,
    from_options: options_post_format,
};

pub fn default_category(site: Option<&Site>) -> Option<u64> {
    resolve_default(site, &DEFAULT_CATEGORY).copied()
}

pub fn default_post_format(site: Option<&Site>) -> Option<&str> {
    resolve_default(site, &DEFAULT_POST_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_permalinks(structure: &str) -> Site {
        Site {
            options: Some(SiteOptions {
                permalink_structure: Some(structure.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn user_can_requires_true_capability() {
        let site = Site {
            capabilities: Some(HashMap::from([
                ("manage_options".to_string(), true),
                ("edit_theme_options".to_string(), false),
            ])),
            ..Default::default()
        };
        assert!(user_can("manage_options", Some(&site)));
        assert!(!user_can("edit_theme_options", Some(&site)));
        assert!(!user_can("publish_posts", Some(&site)));
        assert!(!user_can("manage_options", Some(&Site::default())));
        assert!(!user_can("manage_options", None));
    }

    #[test]
    fn permalink_editable_with_postname() {
        assert!(is_permalink_editable(Some(&with_permalinks("/%postname%/"))));
        assert!(is_permalink_editable(Some(&with_permalinks(
            "/%year%/%monthnum%/%postname%"
        ))));
        assert!(is_permalink_editable(Some(&with_permalinks(
            "/blog/%postname%.html"
        ))));
    }

    #[test]
    fn permalink_not_editable_without_postname() {
        assert!(!is_permalink_editable(Some(&with_permalinks(
            "/%year%/%monthnum%/%day%/"
        ))));
        assert!(!is_permalink_editable(Some(&with_permalinks("%postname%"))));
        assert!(!is_permalink_editable(Some(&with_permalinks(""))));
        assert!(!is_permalink_editable(Some(&Site::default())));
        assert!(!is_permalink_editable(None));
    }

    #[test]
    fn timezone_and_offset_need_options() {
        let site = Site {
            options: Some(SiteOptions {
                timezone: Some("Europe/Lisbon".into()),
                gmt_offset: Some(GmtOffset::Hours(0.0)),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(timezone(Some(&site)), Some("Europe/Lisbon"));
        assert_eq!(gmt_offset(Some(&site)), Some(&GmtOffset::Hours(0.0)));
        assert_eq!(timezone(Some(&Site::default())), None);
        assert_eq!(gmt_offset(None), None);
    }

    #[test]
    fn defaults_prefer_settings() {
        let site = Site {
            settings: Some(SiteSettings {
                default_category: Some(4),
                default_post_format: Some("aside".into()),
            }),
            options: Some(SiteOptions {
                default_category: Some(1),
                default_post_format: Some("standard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(default_category(Some(&site)), Some(4));
        assert_eq!(default_post_format(Some(&site)), Some("aside"));
        assert_eq!(default_source(Some(&site)), Some(DefaultSource::Settings));
    }

    #[test]
    fn defaults_fall_back_to_options_only_without_settings() {
        let mut site = Site {
            options: Some(SiteOptions {
                default_category: Some(1),
                default_post_format: Some("standard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(default_category(Some(&site)), Some(1));
        assert_eq!(default_post_format(Some(&site)), Some("standard"));

        // An empty settings object shadows options entirely.
        site.settings = Some(SiteSettings::default());
        assert_eq!(default_category(Some(&site)), None);
        assert_eq!(default_post_format(Some(&site)), None);
    }

    #[test]
    fn defaults_without_site_or_containers() {
        assert_eq!(default_category(None), None);
        assert_eq!(default_post_format(Some(&Site::default())), None);
        assert_eq!(default_source(Some(&Site::default())), None);
    }

    #[test]
    fn jetpack_flag() {
        let site = Site {
            jetpack: true,
            ..Default::default()
        };
        assert!(is_jetpack(Some(&site)));
        assert!(!is_jetpack(Some(&Site::default())));
        assert!(!is_jetpack(None));
    }
}
