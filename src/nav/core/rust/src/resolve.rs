/* src/nav/core/rust/src/resolve.rs */

use crate::annotate::annotate;
use crate::matcher::matches;
use crate::types::{AnnotatedMenuItem, MenuItemDefinition};

/// Progress of one resolution pass. Moves from `Searching` to `Found` at the
/// first match and never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchState {
  #[default]
  Searching,
  Found,
}

impl SearchState {
  pub fn is_found(self) -> bool {
    self == Self::Found
  }
}

/// Mark the node matching `current_path` as active and its ancestors as
/// partly active.
///
/// The tree is taken by value so the pass is its sole owner; nothing outside
/// can see it half-marked. When no node matches, the tree comes back with
/// every flag unchanged.
pub fn resolve_active_paths(
  mut tree: Vec<AnnotatedMenuItem>,
  current_path: &str,
) -> Vec<AnnotatedMenuItem> {
  let mut state = SearchState::Searching;
  mark_active_paths(&mut tree, current_path, &mut state);
  tracing::debug!(current_path, found = state.is_found(), "resolved menu active path");
  tree
}

/// Pre-order, sibling-order walk that stops at the first match anywhere in
/// the tree.
///
/// At each node: a match marks it active and ends this level; otherwise its
/// children are searched, and if the search has succeeded by then the node
/// is an ancestor of the match, gets `partly_active`, and ends this level.
pub fn mark_active_paths(
  items: &mut [AnnotatedMenuItem],
  current_path: &str,
  state: &mut SearchState,
) {
  for item in items.iter_mut() {
    if matches(current_path, &item.path) {
      item.active = true;
      *state = SearchState::Found;
      break;
    }

    if let Some(children) = item.children.as_mut() {
      mark_active_paths(children, current_path, state);
    }

    if state.is_found() {
      item.partly_active = true;
      break;
    }
  }
}

/// Annotate `definitions` and resolve them against `current_path` in one go.
pub fn build_menu(
  definitions: &[MenuItemDefinition],
  current_path: &str,
) -> Vec<AnnotatedMenuItem> {
  resolve_active_paths(annotate(definitions), current_path)
}

/// The active node, if any.
pub fn find_active(tree: &[AnnotatedMenuItem]) -> Option<&AnnotatedMenuItem> {
  active_trail(tree).pop()
}

/// Root-to-active chain: every partly active ancestor followed by the active
/// node. Empty when nothing is active.
pub fn active_trail(tree: &[AnnotatedMenuItem]) -> Vec<&AnnotatedMenuItem> {
  let mut trail = Vec::new();
  let mut level = tree;
  loop {
    if let Some(node) = level.iter().find(|n| n.active) {
      trail.push(node);
      return trail;
    }
    let Some(node) = level.iter().find(|n| n.partly_active) else {
      // Flags without an active leaf (hand-built tree); nothing to report.
      return Vec::new();
    };
    trail.push(node);
    match node.children.as_deref() {
      Some(children) => level = children,
      None => return Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests;
