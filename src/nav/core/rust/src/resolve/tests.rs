/* src/nav/core/rust/src/resolve/tests.rs */

use super::*;
use crate::types::Label;

fn item(path: &str) -> MenuItemDefinition {
  MenuItemDefinition::new(Label::new().with("en", path), path)
}

/// `/`, `/products` (with `/products/a`, `/products/b`), `/contact`
fn shop_menu() -> Vec<MenuItemDefinition> {
  vec![
    item("/"),
    item("/products").with_children(vec![item("/products/a"), item("/products/b")]),
    item("/contact"),
  ]
}

fn flags(node: &AnnotatedMenuItem) -> (bool, bool) {
  (node.active, node.partly_active)
}

fn all_nodes(tree: &[AnnotatedMenuItem]) -> Vec<&AnnotatedMenuItem> {
  let mut out = Vec::new();
  for node in tree {
    out.push(node);
    if let Some(children) = node.children.as_deref() {
      out.extend(all_nodes(children));
    }
  }
  out
}

#[test]
fn nested_match_marks_parent_partly_active() {
  let tree = build_menu(&shop_menu(), "/products/b");
  let products = &tree[1];
  let kids = products.children.as_ref().unwrap();

  assert_eq!(flags(products), (false, true));
  assert_eq!(flags(&kids[1]), (true, false));
  assert_eq!(flags(&kids[0]), (false, false));
  assert_eq!(flags(&tree[0]), (false, false));
  assert_eq!(flags(&tree[2]), (false, false));
}

#[test]
fn no_match_leaves_every_flag_clear() {
  let tree = build_menu(&shop_menu(), "/nope");
  assert!(all_nodes(&tree).iter().all(|n| flags(n) == (false, false)));
  assert!(find_active(&tree).is_none());
  assert!(active_trail(&tree).is_empty());
}

#[test]
fn top_level_match_has_no_partly_active_nodes() {
  let tree = build_menu(&shop_menu(), "/contact/");
  assert_eq!(flags(&tree[2]), (true, false));
  assert!(all_nodes(&tree).iter().all(|n| !n.partly_active));
}

#[test]
fn parent_match_does_not_mark_children() {
  let tree = build_menu(&shop_menu(), "/PRODUCTS");
  assert_eq!(flags(&tree[1]), (true, false));
  let kids = tree[1].children.as_ref().unwrap();
  assert!(kids.iter().all(|n| flags(n) == (false, false)));
}

#[test]
fn duplicate_paths_first_in_pre_order_wins() {
  let defs = vec![
    item("/a").with_children(vec![item("/dup")]),
    item("/dup"),
  ];
  let tree = build_menu(&defs, "/dup");
  assert_eq!(flags(&tree[0]), (false, true));
  assert_eq!(flags(&tree[0].children.as_ref().unwrap()[0]), (true, false));
  assert_eq!(flags(&tree[1]), (false, false));
  assert_eq!(all_nodes(&tree).iter().filter(|n| n.active).count(), 1);
}

#[test]
fn deep_match_marks_every_ancestor() {
  let defs = vec![
    item("/x"),
    item("/a").with_children(vec![
      item("/a/1"),
      item("/a/2").with_children(vec![item("/a/2/i").with_children(vec![item("/a/2/i/z")])]),
    ]),
  ];
  let tree = build_menu(&defs, "/a/2/i/z");
  let trail: Vec<&str> = active_trail(&tree).iter().map(|n| n.path.as_str()).collect();
  assert_eq!(trail, vec!["/a", "/a/2", "/a/2/i", "/a/2/i/z"]);

  let partly: Vec<&str> =
    all_nodes(&tree).iter().filter(|n| n.partly_active).map(|n| n.path.as_str()).collect();
  assert_eq!(partly, vec!["/a", "/a/2", "/a/2/i"]);
  assert_eq!(find_active(&tree).map(|n| n.path.as_str()), Some("/a/2/i/z"));
}

#[test]
fn search_state_moves_to_found_once() {
  let mut tree = annotate(&shop_menu());
  let mut state = SearchState::default();
  assert_eq!(state, SearchState::Searching);

  mark_active_paths(&mut tree, "/products/a", &mut state);
  assert!(state.is_found());
  assert!(tree[1].children.as_ref().unwrap()[0].active);
}

#[test]
fn found_state_skips_remaining_siblings() {
  // Entering a walk with the search already over: the first node is treated
  // as an ancestor and nothing else is visited.
  let mut tree = annotate(&shop_menu());
  let mut state = SearchState::Found;
  mark_active_paths(&mut tree, "/contact", &mut state);
  assert_eq!(flags(&tree[0]), (false, true));
  assert_eq!(flags(&tree[2]), (false, false));
}

#[test]
fn reinvocation_keeps_marks() {
  let once = build_menu(&shop_menu(), "/products/b");
  let twice = resolve_active_paths(once.clone(), "/products/b");
  assert_eq!(once, twice);
}

#[test]
fn empty_children_are_searched_harmlessly() {
  let defs = vec![item("/empty").with_children(vec![]), item("/b")];
  let tree = build_menu(&defs, "/b");
  assert_eq!(flags(&tree[0]), (false, false));
  assert_eq!(flags(&tree[1]), (true, false));
  assert_eq!(tree[0].children, Some(vec![]));
}

#[test]
fn root_path_matches_empty_current_path() {
  let tree = build_menu(&shop_menu(), "");
  assert_eq!(flags(&tree[0]), (true, false));
}
