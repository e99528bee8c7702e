//! Current-page markers.
//!
//! Adds `current-menu-item`, `current-menu-parent` and
//! `current-menu-ancestor` classes for a given page url so the renderer can
//! highlight the active trail.

use std::collections::{HashMap, HashSet};

use crate::models::{MenuItem, CURRENT_ANCESTOR, CURRENT_ITEM, CURRENT_PARENT};

/// Mark the items pointing at `current_url` and their ancestry.
///
/// Urls are compared after dropping a `#fragment` and a trailing `/`.
/// The direct parent of a current item gets both the parent and the ancestor
/// marker. Returns the number of items matching the url.
pub fn mark_current(items: &mut [MenuItem], current_url: &str) -> usize {
    let target = normalize_url(current_url);
    if target.is_empty() {
        return 0;
    }

    let mut position: HashMap<u64, usize> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        position.entry(item.id).or_insert(idx);
    }

    let matches: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| normalize_url(&item.url) == target)
        .map(|(idx, _)| idx)
        .collect();

    for &idx in &matches {
        items[idx].add_class(CURRENT_ITEM);

        let mut seen = HashSet::from([items[idx].id]);
        let mut next = items[idx].parent_id();
        let mut direct = true;
        while let Some(parent) = next {
            if !seen.insert(parent) {
                break;
            }
            let Some(&pidx) = position.get(&parent) else {
                break;
            };
            if direct {
                items[pidx].add_class(CURRENT_PARENT);
                direct = false;
            }
            items[pidx].add_class(CURRENT_ANCESTOR);
            next = items[pidx].parent_id();
        }
    }

    tracing::debug!(url = current_url, matches = matches.len(), "marked current items");
    matches.len()
}

fn normalize_url(url: &str) -> &str {
    let url = url.trim();
    let url = url.split('#').next().unwrap_or(url);
    match url.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Home", "/"),
            MenuItem::new(2, "Shop", "/shop"),
            MenuItem::new(3, "Shoes", "/shop/shoes").with_parent(2),
            MenuItem::new(4, "Boots", "/shop/shoes/boots").with_parent(3),
            MenuItem::new(5, "Hats", "/shop/hats").with_parent(2),
        ]
    }

    #[test]
    fn marks_item_parent_and_ancestors() {
        let mut items = menu();
        assert_eq!(mark_current(&mut items, "/shop/shoes/boots/"), 1);

        assert_eq!(items[3].classes, vec![CURRENT_ITEM]);
        assert_eq!(items[2].classes, vec![CURRENT_PARENT, CURRENT_ANCESTOR]);
        assert_eq!(items[1].classes, vec![CURRENT_ANCESTOR]);
        assert!(items[0].classes.is_empty());
        assert!(items[4].classes.is_empty());
    }

    #[test]
    fn root_url_matches_only_root() {
        let mut items = menu();
        assert_eq!(mark_current(&mut items, "/#top"), 1);
        assert_eq!(items[0].classes, vec![CURRENT_ITEM]);
    }

    #[test]
    fn no_match_changes_nothing() {
        let mut items = menu();
        assert_eq!(mark_current(&mut items, "/blog"), 0);
        assert!(items.iter().all(|i| i.classes.is_empty()));
        assert_eq!(mark_current(&mut items, ""), 0);
    }

    #[test]
    fn cycle_does_not_loop() {
        let mut items = vec![
            MenuItem::new(1, "A", "/a").with_parent(2),
            MenuItem::new(2, "B", "/b").with_parent(1),
        ];
        assert_eq!(mark_current(&mut items, "/a"), 1);
        assert_eq!(items[0].classes, vec![CURRENT_ITEM]);
        assert_eq!(items[1].classes, vec![CURRENT_PARENT, CURRENT_ANCESTOR]);
    }

    #[test]
    fn markers_are_not_duplicated() {
        let mut items = menu();
        mark_current(&mut items, "/shop/hats");
        mark_current(&mut items, "/shop/hats");
        assert_eq!(items[1].classes, vec![CURRENT_PARENT, CURRENT_ANCESTOR]);
    }
}
