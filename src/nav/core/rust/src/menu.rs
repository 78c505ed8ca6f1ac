/* src/nav/core/rust/src/menu.rs */

//! Menu definition input: parsing and sanity checks.

use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::NavError;
use crate::matcher::normalize_path;
use crate::types::MenuItemDefinition;

#[derive(Deserialize)]
struct WrappedMenu {
  items: Vec<MenuItemDefinition>,
}

/// Parse a menu definition from JSON: either a bare array of items or an
/// object with an `items` array.
pub fn parse_menu(json: &str) -> Result<Vec<MenuItemDefinition>, NavError> {
  let value: serde_json::Value =
    serde_json::from_str(json).map_err(|e| NavError::parse(format!("menu json: {e}")))?;
  let parse_err = |e: serde_json::Error| NavError::parse(format!("menu definition: {e}"));
  if value.is_array() {
    serde_json::from_value(value).map_err(parse_err)
  } else if value.is_object() {
    let wrapped: WrappedMenu = serde_json::from_value(value).map_err(parse_err)?;
    Ok(wrapped.items)
  } else {
    Err(NavError::parse(format!("menu must be an array or an object, got {value}")))
  }
}

/// Normalized paths that occur more than once, in first pre-order occurrence.
///
/// Only the first occurrence can ever become active.
pub fn find_duplicate_paths(definitions: &[MenuItemDefinition]) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut reported = HashSet::new();
  let mut duplicates = Vec::new();
  collect_duplicates(definitions, &mut seen, &mut reported, &mut duplicates);
  duplicates
}

fn collect_duplicates(
  definitions: &[MenuItemDefinition],
  seen: &mut HashSet<String>,
  reported: &mut HashSet<String>,
  duplicates: &mut Vec<String>,
) {
  for def in definitions {
    let path = normalize_path(&def.path);
    if !seen.insert(path.clone()) && reported.insert(path.clone()) {
      duplicates.push(path);
    }
    if let Some(children) = def.children.as_deref() {
      collect_duplicates(children, seen, reported, duplicates);
    }
  }
}

/// Total number of entries at every depth.
pub fn count_items(definitions: &[MenuItemDefinition]) -> usize {
  definitions.iter().map(|d| 1 + d.children.as_deref().map_or(0, count_items)).sum()
}
