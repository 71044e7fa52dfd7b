//! URL and network-topology checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::site::Site;

static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid scheme regex"));

/// Strip a leading `http://` or `https://` from `url`.
///
/// Returns `None` for a missing or empty URL. Only one scheme prefix is
/// removed.
pub fn without_http(url: Option<&str>) -> Option<&str> {
    let url = url.filter(|u| !u.is_empty())?;
    match HTTP_SCHEME.find(url) {
        Some(m) => url.get(m.end()..),
        None => Some(url),
    }
}

/// Whether `site` is the main site of its network.
///
/// Single sites are trivially their own main site. For multisite installs the
/// scheme-less `unmapped_url` must equal the network's `main_network_site`.
/// Multi-network installs and sites with unknown topology never qualify.
pub fn is_main_network_site(site: Option<&Site>) -> bool {
    let Some(site) = site else {
        return false;
    };
    let options = site.options.as_ref();
    if options.is_some_and(|o| o.is_multi_network) {
        return false;
    }

    match site.is_multisite {
        Some(false) => true,
        Some(true) => {
            let unmapped = without_http(options.and_then(|o| o.unmapped_url.as_deref()));
            let main = without_http(options.and_then(|o| o.main_network_site.as_deref()));
            match (unmapped, main) {
                (Some(unmapped), Some(main)) => unmapped == main,
                _ => false,
            }
        }
        None => false,
    }
}

/// Whether a custom domain is mapped onto `site`.
///
/// Compares the public `URL` with `options.unmapped_url`, both without their
/// scheme. Returns `None` when there is no site to inspect.
pub fn has_custom_domain(site: Option<&Site>) -> Option<bool> {
    let site = site?;
    let url = without_http(site.url.as_deref());
    let unmapped = without_http(
        site.options
            .as_ref()
            .and_then(|o| o.unmapped_url.as_deref()),
    );
    Some(url != unmapped)
}
