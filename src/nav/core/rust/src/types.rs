/* src/nav/core/rust/src/types.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Display strings keyed by locale code (`{"en": "About", "de": "Über uns"}`).
///
/// A `null` label or `null` entries deserialize as missing, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Label(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for Label {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw: Option<BTreeMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    let entries = raw.unwrap_or_default().into_iter().filter_map(|(k, v)| v.map(|v| (k, v)));
    Ok(Self(entries.collect()))
  }
}

impl Label {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert, mostly for fixtures.
  pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
    self.0.insert(locale.into(), text.into());
    self
  }

  pub fn get(&self, locale: &str) -> Option<&str> {
    self.0.get(locale).map(String::as_str)
  }

  pub fn locales(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

/// One entry of a menu as supplied by the site.
///
/// `children: None` and `children: Some(vec![])` are different things: the
/// renderer shows a dropdown indicator whenever the field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDefinition {
  #[serde(default, alias = "item")]
  pub label: Label,
  #[serde(alias = "to")]
  pub path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<MenuItemDefinition>>,
}

impl MenuItemDefinition {
  pub fn new(label: Label, path: impl Into<String>) -> Self {
    Self { label, path: path.into(), children: None }
  }

  pub fn with_children(mut self, children: Vec<MenuItemDefinition>) -> Self {
    self.children = Some(children);
    self
  }
}

/// A menu entry carrying the active-page flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedMenuItem {
  pub label: Label,
  pub path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<AnnotatedMenuItem>>,
  /// This entry is the current page.
  #[serde(default)]
  pub active: bool,
  /// The current page is somewhere below this entry.
  #[serde(default)]
  pub partly_active: bool,
}
