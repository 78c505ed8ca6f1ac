/* src/nav/core/rust/src/annotate.rs */

use crate::types::{AnnotatedMenuItem, MenuItemDefinition};

/// Copy a definition tree into a fresh annotated tree with every flag cleared.
///
/// Sibling and child order follow the input. A node gets a `children` field
/// exactly when its definition has one, even an empty one.
pub fn annotate(definitions: &[MenuItemDefinition]) -> Vec<AnnotatedMenuItem> {
  definitions.iter().map(annotate_item).collect()
}

fn annotate_item(def: &MenuItemDefinition) -> AnnotatedMenuItem {
  AnnotatedMenuItem {
    label: def.label.clone(),
    path: def.path.clone(),
    children: def.children.as_deref().map(annotate),
    active: false,
    partly_active: false,
  }
}
