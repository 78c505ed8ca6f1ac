/* src/nav/engine/rust/src/lib.rs */

//! Presentation layer for seam-nav: turns an annotated menu into HTML with
//! locale-aware links and `active` / `partlyActive` state classes.
//! Pure functions over strings, no filesystem I/O.

pub mod escape;
pub mod link;
pub mod options;
pub mod page;
pub mod render;

// Public API re-exports
pub use escape::escape_html;
pub use link::{is_hash, localized_href, split_locale_prefix};
pub use options::{
  DropdownIndicatorFn, I18nSection, LinkContext, LinkRendererFn, NavConfig, RenderOptions,
  RenderSection,
};
pub use page::{render_nav, render_nav_with};
pub use render::{item_label, render_menu, state_class};
