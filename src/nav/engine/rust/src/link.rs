/* src/nav/engine/rust/src/link.rs */

/// In-page anchor (`#section`). Empty paths are not anchors.
pub fn is_hash(path: &str) -> bool {
  path.starts_with('#')
}

/// Link target for `path` in `locale`.
///
/// The primary locale lives at the site root and anchors stay relative to
/// the current page, so both pass through unchanged. Every other locale gets
/// a `/{locale}` segment in front.
pub fn localized_href(path: &str, locale: &str, primary_locale: &str) -> String {
  if locale == primary_locale || is_hash(path) {
    return path.to_string();
  }
  if path.starts_with('/') { format!("/{locale}{path}") } else { format!("/{locale}/{path}") }
}

/// Split a leading `/{locale}` segment off a request path when it names one
/// of `locales` (ASCII case-insensitive, like path matching). Returns the
/// configured spelling of the locale (if any) and the path without it; a
/// bare `/{locale}` maps to `/`.
pub fn split_locale_prefix<'a, 'l>(
  request_path: &'a str,
  locales: &'l [String],
) -> (Option<&'l str>, &'a str) {
  let Some(rest) = request_path.strip_prefix('/') else {
    return (None, request_path);
  };
  let segment = rest.split('/').next().unwrap_or("");
  let found = if segment.is_empty() {
    None
  } else {
    locales.iter().find(|l| l.eq_ignore_ascii_case(segment))
  };
  let Some(locale) = found else {
    return (None, request_path);
  };
  let remainder = &rest[segment.len()..];
  (Some(locale.as_str()), if remainder.is_empty() { "/" } else { remainder })
}
