//! Property tests for menu rendering.

use proptest::prelude::*;

use navwalker::{classify, render, ItemKind, MenuItem};

const CLASS_POOL: &[&str] = &[
    "menu-item",
    "highlight",
    "dropdown-menu-end",
    "dropdown-menu-lg-end",
    "dropdown-menu-sm-start",
    "dropdown-menu-middle",
    "current-menu-item",
    "current-menu-ancestor",
    "active",
    "dropdown-divider",
    "dropdown-header",
];

fn item_parts() -> impl Strategy<Value = (String, String, Vec<&'static str>)> {
    (
        "[A-Za-z0-9 <>&\"']{0,12}",
        "(/[a-z0-9]{1,6}){0,3}",
        proptest::collection::vec(proptest::sample::select(CLASS_POOL), 0..3),
    )
}

fn build_item(id: u64, (title, url, classes): (String, String, Vec<&'static str>)) -> MenuItem {
    let mut item = MenuItem::new(id, title, url);
    item.classes = classes.into_iter().map(str::to_string).collect();
    item
}

/// Well-formed menus: the first item is a root, every other item is either a
/// root or the child of an earlier item.
fn tree_menu() -> impl Strategy<Value = Vec<MenuItem>> {
    proptest::collection::vec((item_parts(), any::<prop::sample::Index>(), any::<bool>()), 0..24)
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (parts, parent, root))| {
                    let mut item = build_item(i as u64 + 1, parts);
                    if i > 0 && !root {
                        item.parent = Some(parent.index(i) as u64 + 1);
                    }
                    item
                })
                .collect()
        })
}

/// Arbitrary parent references: dangling, self-referencing and cyclic.
fn tangled_menu() -> impl Strategy<Value = Vec<MenuItem>> {
    proptest::collection::vec((item_parts(), 0u64..30), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (parts, parent))| {
                let mut item = build_item(i as u64 + 1, parts);
                item.parent = Some(parent);
                item
            })
            .collect()
    })
}

fn has_children(items: &[MenuItem], id: u64) -> bool {
    items.iter().any(|i| i.parent_id() == Some(id))
}

fn is_active(item: &MenuItem) -> bool {
    item.has_class("active")
        || item.has_class("current-menu-item")
        || item.has_class("current-menu-parent")
        || item.has_class("current-menu-ancestor")
}

fn element_line_index(lines: &[&str], id: u64) -> usize {
    let needle = format!("<li id=\"menu-item-{}\"", id);
    lines
        .iter()
        .position(|l| l.trim_start().starts_with(&needle))
        .unwrap_or_else(|| panic!("no element for item {}", id))
}

fn class_attr(line: &str) -> Vec<&str> {
    let start = line.find("class=\"").expect("class attribute") + "class=\"".len();
    let end = start + line[start..].find('"').expect("closing quote");
    line[start..end].split(' ').collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every item produces exactly one element and one body.
    #[test]
    fn property_one_element_per_item(items in tree_menu()) {
        let html = render(&items);

        prop_assert_eq!(html.matches("<li id=").count(), items.len());
        let bodies = html.matches("<a ").count()
            + html.matches("<hr ").count()
            + html.matches("<h6 ").count();
        prop_assert_eq!(bodies, items.len());
    }

    /// PROPERTY: toggle markers appear exactly on links that own a submenu.
    #[test]
    fn property_toggle_iff_children(items in tree_menu()) {
        let html = render(&items);
        let lines: Vec<&str> = html.lines().collect();

        for item in &items {
            if classify(item) != ItemKind::Link {
                continue;
            }
            let line = lines[element_line_index(&lines, item.id)];
            let expected = has_children(&items, item.id);
            prop_assert_eq!(line.contains("dropdown-toggle"), expected);
            prop_assert_eq!(line.contains("aria-haspopup=\"true\""), expected);
            prop_assert_eq!(line.contains("data-bs-toggle=\"dropdown\""), expected);
        }
    }

    /// PROPERTY: only links of active items carry the current-page marker.
    #[test]
    fn property_active_only_on_own_link(items in tree_menu()) {
        let html = render(&items);
        let lines: Vec<&str> = html.lines().collect();

        for item in &items {
            if classify(item) != ItemKind::Link {
                continue;
            }
            let line = lines[element_line_index(&lines, item.id)];
            prop_assert_eq!(line.contains("aria-current=\"page\""), is_active(item));
        }
    }

    /// PROPERTY: a submenu carries exactly its parent's allow-listed alignment classes.
    #[test]
    fn property_submenu_alignment_from_parent(items in tree_menu()) {
        let html = render(&items);
        let lines: Vec<&str> = html.lines().collect();

        for item in items.iter().filter(|i| has_children(&items, i.id)) {
            let submenu = lines[element_line_index(&lines, item.id) + 1];
            prop_assert!(submenu.trim_start().starts_with("<ul class=\"dropdown-menu depth_"));

            let classes = class_attr(submenu);
            let expected: Vec<&str> = item.alignment_classes().collect();
            prop_assert_eq!(&classes[2..], expected.as_slice());
        }
    }

    /// PROPERTY: rendering is deterministic.
    #[test]
    fn property_render_is_deterministic(items in tree_menu()) {
        prop_assert_eq!(render(&items), render(&items));
    }

    /// PROPERTY: dangling and cyclic parents never panic or drop items.
    #[test]
    fn property_tangled_parents_emit_every_item(items in tangled_menu()) {
        let html = render(&items);
        prop_assert_eq!(html.matches("<li id=").count(), items.len());
        prop_assert_eq!(render(&items), html);
    }
}
