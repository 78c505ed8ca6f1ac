/* src/nav/core/rust/src/lib.rs */

//! Active-path annotation for hierarchical, multi-locale navigation menus.
//!
//! A menu definition is copied into an annotated tree ([`annotate`]) and then
//! resolved against the current page path ([`resolve_active_paths`]): the
//! first entry in pre-order whose path matches becomes `active`, and every
//! ancestor of it becomes `partly_active`.

pub mod annotate;
pub mod errors;
pub mod matcher;
pub mod menu;
pub mod resolve;
pub mod types;

// Public API re-exports
pub use annotate::annotate;
pub use errors::NavError;
pub use matcher::{matches, matches_value, normalize_path};
pub use menu::{count_items, find_duplicate_paths, parse_menu};
pub use resolve::{
  SearchState, active_trail, build_menu, find_active, mark_active_paths, resolve_active_paths,
};
pub use types::{AnnotatedMenuItem, Label, MenuItemDefinition};
