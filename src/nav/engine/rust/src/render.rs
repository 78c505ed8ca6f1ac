/* src/nav/engine/rust/src/render.rs */

use seam_nav::AnnotatedMenuItem;

use crate::escape::escape_html;
use crate::link::localized_href;
use crate::options::{LinkContext, RenderOptions};

/// State class for an entry's `<li>`: `active`, `partlyActive`, or empty.
pub fn state_class(item: &AnnotatedMenuItem) -> &'static str {
  if item.active {
    "active"
  } else if item.partly_active {
    "partlyActive"
  } else {
    ""
  }
}

/// Label for `locale`, falling back to the primary locale, then to "".
pub fn item_label<'a>(item: &'a AnnotatedMenuItem, locale: &str, primary_locale: &str) -> &'a str {
  item.label.get(locale).or_else(|| item.label.get(primary_locale)).unwrap_or("")
}

/// Render an annotated tree as nested `<ul>`/`<li>` lists.
pub fn render_menu(tree: &[AnnotatedMenuItem], locale: &str, options: &RenderOptions) -> String {
  let mut out = String::new();
  render_list(tree, locale, options, true, &mut out);
  out
}

fn render_list(
  items: &[AnnotatedMenuItem],
  locale: &str,
  options: &RenderOptions,
  top_level: bool,
  out: &mut String,
) {
  match options.top_level_class_name.as_deref() {
    Some(class) if top_level && !class.is_empty() => {
      out.push_str(&format!(r#"<ul class="{}">"#, escape_html(class)));
    }
    _ => out.push_str("<ul>"),
  }
  for item in items {
    render_item(item, locale, options, out);
  }
  out.push_str("</ul>");
}

fn render_item(item: &AnnotatedMenuItem, locale: &str, options: &RenderOptions, out: &mut String) {
  let class = state_class(item);
  if class.is_empty() {
    out.push_str("<li>");
  } else {
    out.push_str(&format!(r#"<li class="{class}">"#));
  }

  let label = escape_html(item_label(item, locale, &options.primary_locale));
  let href = localized_href(&item.path, locale, &options.primary_locale);
  let ctx = LinkContext { href: &href, label: &label, item, locale };
  match options.link_renderer.as_ref() {
    Some(render_link) => out.push_str(&render_link(&ctx)),
    None => out.push_str(&default_link(&ctx)),
  }

  // Presence of the field decides, not emptiness.
  if let Some(children) = item.children.as_deref() {
    if let Some(indicator) = options.dropdown_indicator_renderer.as_ref() {
      out.push_str(&indicator(item));
    }
    render_list(children, locale, options, false, out);
  }

  out.push_str("</li>");
}

fn default_link(ctx: &LinkContext<'_>) -> String {
  format!(r#"<a href="{}">{}</a>"#, escape_html(ctx.href), ctx.label)
}
