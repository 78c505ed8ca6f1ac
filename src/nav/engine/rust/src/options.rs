/* src/nav/engine/rust/src/options.rs */

use std::fmt;
use std::sync::Arc;

use seam_nav::{AnnotatedMenuItem, NavError};
use serde::{Deserialize, Serialize};

/// What a link renderer gets for one menu entry.
pub struct LinkContext<'a> {
  /// Locale-aware target, not yet escaped.
  pub href: &'a str,
  /// Display text, already HTML-escaped.
  pub label: &'a str,
  pub item: &'a AnnotatedMenuItem,
  pub locale: &'a str,
}

pub type LinkRendererFn = Arc<dyn Fn(&LinkContext<'_>) -> String + Send + Sync>;
pub type DropdownIndicatorFn = Arc<dyn Fn(&AnnotatedMenuItem) -> String + Send + Sync>;

/// Presentation hooks for [`crate::render_menu`]. Hooks left as `None` fall
/// back to a plain `<a>` and no dropdown indicator.
#[derive(Clone)]
pub struct RenderOptions {
  pub link_renderer: Option<LinkRendererFn>,
  pub dropdown_indicator_renderer: Option<DropdownIndicatorFn>,
  pub primary_locale: String,
  pub top_level_class_name: Option<String>,
}

impl RenderOptions {
  pub fn new(primary_locale: impl Into<String>) -> Self {
    Self {
      link_renderer: None,
      dropdown_indicator_renderer: None,
      primary_locale: primary_locale.into(),
      top_level_class_name: None,
    }
  }

  #[must_use]
  pub fn with_link_renderer(
    mut self,
    f: impl Fn(&LinkContext<'_>) -> String + Send + Sync + 'static,
  ) -> Self {
    self.link_renderer = Some(Arc::new(f));
    self
  }

  #[must_use]
  pub fn with_dropdown_indicator(
    mut self,
    f: impl Fn(&AnnotatedMenuItem) -> String + Send + Sync + 'static,
  ) -> Self {
    self.dropdown_indicator_renderer = Some(Arc::new(f));
    self
  }

  #[must_use]
  pub fn with_top_level_class(mut self, class: impl Into<String>) -> Self {
    self.top_level_class_name = Some(class.into());
    self
  }
}

impl fmt::Debug for RenderOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RenderOptions")
      .field("link_renderer", &self.link_renderer.is_some())
      .field("dropdown_indicator_renderer", &self.dropdown_indicator_renderer.is_some())
      .field("primary_locale", &self.primary_locale)
      .field("top_level_class_name", &self.top_level_class_name)
      .finish()
  }
}

// --- Declarative config (nav.toml / JSON) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
  pub i18n: I18nSection,
  #[serde(default)]
  pub render: RenderSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  #[serde(default = "default_i18n_default")]
  pub default: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSection {
  /// Class on the outermost `<ul>`.
  #[serde(default)]
  pub top_level_class: Option<String>,
  /// Raw HTML placed after the link of every entry with children.
  #[serde(default)]
  pub dropdown_indicator: Option<String>,
}

fn default_i18n_default() -> String {
  "en".to_string()
}

impl I18nSection {
  pub fn validate(&self) -> Result<(), NavError> {
    if self.locales.is_empty() {
      return Err(NavError::config("i18n.locales must not be empty"));
    }
    if !self.locales.contains(&self.default) {
      return Err(NavError::config(format!(
        "i18n.default \"{}\" is not in i18n.locales {:?}",
        self.default, self.locales
      )));
    }
    Ok(())
  }
}

impl NavConfig {
  pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
    let config: Self =
      toml::from_str(content).map_err(|e| NavError::config(format!("nav config toml: {e}")))?;
    config.i18n.validate()?;
    Ok(config)
  }

  pub fn from_json_str(content: &str) -> Result<Self, NavError> {
    let config: Self = serde_json::from_str(content)
      .map_err(|e| NavError::config(format!("nav config json: {e}")))?;
    config.i18n.validate()?;
    Ok(config)
  }

  /// Render options with the default link renderer and, when configured, a
  /// static dropdown indicator.
  pub fn render_options(&self) -> RenderOptions {
    let mut options = RenderOptions::new(self.i18n.default.clone());
    options.top_level_class_name = self.render.top_level_class.clone();
    if let Some(indicator) = self.render.dropdown_indicator.clone() {
      options = options.with_dropdown_indicator(move |_| indicator.clone());
    }
    options
  }
}
