/* src/nav/engine/wasm/src/lib.rs */

use seam_nav_engine::NavConfig;
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn error_json(e: &seam_nav::NavError) -> String {
  serde_json::json!({ "error": e.to_string() }).to_string()
}

// --- Core functions ---

/// Path comparison for JS callers; anything that is not a string is a non-match.
#[wasm_bindgen]
pub fn match_paths(a: &JsValue, b: &JsValue) -> bool {
  seam_nav::matches_value(&js_path(a), &js_path(b))
}

// Strings carry over; every other JS value becomes null and never matches.
fn js_path(value: &JsValue) -> Value {
  value.as_string().map_or(Value::Null, Value::String)
}

#[wasm_bindgen]
pub fn annotate_menu(menu_json: &str, current_path: &str) -> String {
  match seam_nav::parse_menu(menu_json) {
    Ok(definitions) => {
      let tree = seam_nav::build_menu(&definitions, current_path);
      serde_json::to_string(&tree).unwrap_or_else(|_| "[]".to_string())
    }
    Err(e) => error_json(&e),
  }
}

#[wasm_bindgen]
pub fn find_duplicate_paths(menu_json: &str) -> String {
  match seam_nav::parse_menu(menu_json) {
    Ok(definitions) => serde_json::to_string(&seam_nav::find_duplicate_paths(&definitions))
      .unwrap_or_else(|_| "[]".to_string()),
    Err(e) => error_json(&e),
  }
}

// --- Engine functions ---

#[wasm_bindgen]
pub fn is_hash(path: &str) -> bool {
  seam_nav_engine::is_hash(path)
}

#[wasm_bindgen]
pub fn localized_href(path: &str, locale: &str, primary_locale: &str) -> String {
  seam_nav_engine::localized_href(path, locale, primary_locale)
}

#[wasm_bindgen]
pub fn render_nav(menu_json: &str, request_path: &str, config_json: &str) -> String {
  let rendered = NavConfig::from_json_str(config_json)
    .and_then(|config| seam_nav_engine::render_nav(menu_json, request_path, &config));
  match rendered {
    Ok(html) => html,
    Err(e) => error_json(&e),
  }
}
