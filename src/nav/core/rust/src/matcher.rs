/* src/nav/core/rust/src/matcher.rs */

use serde_json::Value;

/// Drop one trailing `/` (only the last character) and lower-case.
pub fn normalize_path(path: &str) -> String {
  path.strip_suffix('/').unwrap_or(path).to_lowercase()
}

/// Case-insensitive, trailing-slash-insensitive path equality.
/// There is no prefix matching here: ancestry is a tree property.
pub fn matches(a: &str, b: &str) -> bool {
  normalize_path(a) == normalize_path(b)
}

/// `matches` for dynamically typed input. Anything that is not a string
/// compares unequal instead of failing.
pub fn matches_value(a: &Value, b: &Value) -> bool {
  match (a.as_str(), b.as_str()) {
    (Some(a), Some(b)) => matches(a, b),
    _ => false,
  }
}
