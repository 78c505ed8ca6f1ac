/* src/nav/engine/rust/src/page.rs */

use seam_nav::{NavError, build_menu, find_duplicate_paths, parse_menu};

use crate::link::split_locale_prefix;
use crate::options::{NavConfig, RenderOptions};
use crate::render::render_menu;

/// Render the navigation for one request from declarative config.
///
/// `menu_json` is the menu definition (array, or `{"items": [...]}`);
/// `request_path` is the raw page path, locale prefix included.
pub fn render_nav(
  menu_json: &str,
  request_path: &str,
  config: &NavConfig,
) -> Result<String, NavError> {
  render_nav_with(menu_json, request_path, &config.i18n.locales, &config.render_options())
}

/// Like [`render_nav`], with caller-supplied render hooks.
///
/// Steps: parse the menu, split the locale prefix off the request path
/// (no prefix means the primary locale), annotate and resolve against the
/// remaining path, render.
pub fn render_nav_with(
  menu_json: &str,
  request_path: &str,
  locales: &[String],
  options: &RenderOptions,
) -> Result<String, NavError> {
  let definitions = parse_menu(menu_json)?;

  let duplicates = find_duplicate_paths(&definitions);
  if !duplicates.is_empty() {
    tracing::warn!(?duplicates, "menu has duplicate paths; only the first of each can be active");
  }

  let (path_locale, path) = split_locale_prefix(request_path, locales);
  let locale = path_locale.unwrap_or(options.primary_locale.as_str());
  tracing::debug!(request_path, locale, path, "rendering navigation");

  let tree = build_menu(&definitions, path);
  Ok(render_menu(&tree, locale, options))
}
