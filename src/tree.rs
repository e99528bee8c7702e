//! Menu tree index.
//!
//! Builds an arena-style index over a flat, ordered slice of menu items:
//! root positions plus a `parent id -> child positions` map. Siblings keep
//! their input order and parent ids keep the order of first appearance.

use indexmap::IndexMap;

use crate::models::MenuItem;

/// Index over a borrowed slice of menu items
#[derive(Debug, Clone)]
pub struct MenuTree<'a> {
    items: &'a [MenuItem],
    roots: Vec<usize>,
    children: IndexMap<u64, Vec<usize>>,
}

impl<'a> MenuTree<'a> {
    /// Build the index in one pass over `items`.
    ///
    /// Items without a parent are roots. When no item qualifies, the items
    /// sharing the first item's parent are used as roots instead.
    pub fn build(items: &'a [MenuItem]) -> Self {
        let mut roots = Vec::new();
        let mut children: IndexMap<u64, Vec<usize>> = IndexMap::new();

        for (idx, item) in items.iter().enumerate() {
            match item.parent_id() {
                None => roots.push(idx),
                Some(parent) => children.entry(parent).or_default().push(idx),
            }
        }

        if roots.is_empty() {
            if let Some(top) = items.first().and_then(MenuItem::parent_id) {
                if let Some(siblings) = children.shift_remove(&top) {
                    roots = siblings;
                }
            }
        }

        tracing::debug!(
            items = items.len(),
            roots = roots.len(),
            parents = children.len(),
            "built menu tree"
        );

        Self {
            items,
            roots,
            children,
        }
    }

    /// Item at an input position
    pub fn item(&self, idx: usize) -> &'a MenuItem {
        &self.items[idx]
    }

    /// Root positions in input order
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// All child lists keyed by parent id
    pub fn child_lists(&self) -> &IndexMap<u64, Vec<usize>> {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Home", "/"),
            MenuItem::new(2, "Shop", "/shop"),
            MenuItem::new(3, "Shoes", "/shop/shoes").with_parent(2),
            MenuItem::new(4, "Hats", "/shop/hats").with_parent(2),
        ]
    }

    #[test]
    fn build_indexes_roots_and_children() {
        let items = shop_menu();
        let tree = MenuTree::build(&items);

        assert_eq!(tree.roots(), &[0, 1]);
        assert_eq!(tree.child_lists()[&2], vec![2, 3]);
        assert!(!tree.child_lists().contains_key(&1));
    }

    #[test]
    fn build_empty() {
        let tree = MenuTree::build(&[]);
        assert!(tree.roots().is_empty());
        assert!(tree.child_lists().is_empty());
    }

    #[test]
    fn build_treats_parent_zero_as_root() {
        let items = vec![MenuItem::new(1, "Home", "/").with_parent(0)];
        let tree = MenuTree::build(&items);
        assert_eq!(tree.roots(), &[0]);
    }

    #[test]
    fn build_falls_back_to_first_items_parent() {
        // A sub-tree exported without its own parent
        let items = vec![
            MenuItem::new(10, "Shoes", "/shoes").with_parent(5),
            MenuItem::new(11, "Sneakers", "/shoes/sneakers").with_parent(10),
            MenuItem::new(12, "Hats", "/hats").with_parent(5),
        ];
        let tree = MenuTree::build(&items);

        assert_eq!(tree.roots(), &[0, 2]);
        assert_eq!(tree.child_lists()[&10], vec![1]);
        assert!(!tree.child_lists().contains_key(&5));
    }

    #[test]
    fn child_lists_keep_first_appearance_order() {
        let items = vec![
            MenuItem::new(1, "A", "/a"),
            MenuItem::new(2, "B", "/b"),
            MenuItem::new(3, "B1", "/b/1").with_parent(2),
            MenuItem::new(4, "A1", "/a/1").with_parent(1),
            MenuItem::new(5, "B2", "/b/2").with_parent(2),
        ];
        let tree = MenuTree::build(&items);

        let parents: Vec<u64> = tree.child_lists().keys().copied().collect();
        assert_eq!(parents, vec![2, 1]);
        assert_eq!(tree.child_lists()[&2], vec![2, 4]);
    }
}
