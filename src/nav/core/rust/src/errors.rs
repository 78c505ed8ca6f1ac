/* src/nav/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavError {
  code: String,
  message: String,
}

impl NavError {
  pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
    Self { code: code.into(), message: message.into() }
  }

  /// Malformed menu definition input (bad JSON, missing `path`, wrong shape).
  pub fn parse(msg: impl Into<String>) -> Self {
    Self::new("PARSE_ERROR", msg)
  }

  /// Invalid render configuration (unknown default locale, empty locale list).
  pub fn config(msg: impl Into<String>) -> Self {
    Self::new("CONFIG_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for NavError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for NavError {}
