//! Page title composition.
//!
//! ```text
//! (3) Reader ‹ Foo — WordPress.com
//! ^^^ ^^^^^^   ^^^   ^^^^^^^^^^^^^
//! │   │        │     product name
//! │   │        site display name (only when a site applies)
//! │   base title
//! unread count (only when positive)
//! ```

use std::borrow::Cow;

use calypso_site::Site;

/// Separator between the base title and the site name.
pub const SITE_SEPARATOR: &str = " \u{2039} ";
/// Separator before the product name.
pub const PRODUCT_SEPARATOR: &str = " \u{2014} ";

/// Compose the full page title.
///
/// A site without a name or domain is treated as no site. Entities in the
/// composed part are decoded before the product suffix is added; when
/// nothing precedes the suffix the product name stands alone.
pub fn format_title(
    title: &str,
    unread_count: Option<u32>,
    site: Option<&Site>,
    product_name: &str,
) -> String {
    let mut page_title = String::new();

    if let Some(count) = unread_count.filter(|c| *c > 0) {
        page_title.push_str(&format!("({count}) "));
    }

    page_title.push_str(title);

    if let Some(site_name) = site.and_then(Site::display_name) {
        if !page_title.is_empty() {
            page_title.push_str(SITE_SEPARATOR);
        }
        page_title.push_str(site_name);
    }

    if page_title.is_empty() {
        product_name.to_string()
    } else {
        format!("{}{PRODUCT_SEPARATOR}{product_name}", decode_entities(&page_title))
    }
}

/// Longest entity accepted, `&` through `;` inclusive.
/// `&CounterClockwiseContourIntegral;` is the longest HTML5 name.
const MAX_ENTITY_LEN: usize = 33;

/// Decode HTML character references in `text`.
///
/// Handles every HTML5 named entity plus decimal (`&#8217;`) and hex
/// (`&#x2019;`) references. Only terminated references are decoded;
/// anything else, including malformed references, is left as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(rest.get(..amp).unwrap_or_default());
        let tail = rest.get(amp..).unwrap_or_default();
        match decode_reference(tail, &mut out) {
            Some(consumed) => rest = tail.get(consumed..).unwrap_or_default(),
            None => {
                out.push('&');
                rest = tail.get(1..).unwrap_or_default();
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the reference at the start of `tail` (which begins with `&`) into
/// `out`. Returns the number of bytes consumed.
fn decode_reference(tail: &str, out: &mut String) -> Option<usize> {
    let end = tail
        .char_indices()
        .take(MAX_ENTITY_LEN)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let name = tail.get(1..end)?;

    match name.strip_prefix('#') {
        Some(numeric) => out.push(numeric_reference(numeric)?),
        None => {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            // A full match decodes to one or two code points; anything
            // longer is a legacy prefix match such as `&not` in `&notit;`.
            let reference = tail.get(..=end)?;
            match html_escape::decode_html_entities(reference) {
                Cow::Owned(decoded) if decoded.chars().count() <= 2 => out.push_str(&decoded),
                _ => return None,
            }
        }
    }
    Some(end + 1)
}

/// `65` or `x41`. Digits only: signs and whitespace are not references.
fn numeric_reference(numeric: &str) -> Option<char> {
    let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (numeric, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    char::from_u32(u32::from_str_radix(digits, radix).ok()?)
}
