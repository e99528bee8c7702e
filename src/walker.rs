//! Depth-first menu traversal.
//!
//! The traversal owns the tree and all per-render state; a [`Walker`] only
//! turns visit events into markup. The parent item is handed to
//! `start_lvl`/`end_lvl` directly, so a walker never has to remember the
//! last element it saw.

use indexmap::IndexMap;

use crate::models::MenuItem;
use crate::tree::MenuTree;

/// How many levels of the tree to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    /// Render every level (orphans included, at the top)
    #[default]
    Unlimited,
    /// Render every item at depth 0 without submenus
    Flat,
    /// Render at most this many levels
    Levels(usize),
}

impl DepthLimit {
    /// Map the conventional integer setting: `0` unlimited, negative flat, `n` levels
    pub fn from_max_depth(max_depth: i64) -> Self {
        match max_depth {
            0 => Self::Unlimited,
            n if n < 0 => Self::Flat,
            n => Self::Levels(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    /// Whether children of an element at `depth` are rendered
    pub fn descends(self, depth: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Flat => false,
            Self::Levels(n) => n > depth + 1,
        }
    }
}

/// An item as seen during traversal
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    pub item: &'a MenuItem,
    pub depth: usize,
    pub has_children: bool,
}

/// Visitor receiving traversal events in document order
pub trait Walker {
    /// Open the submenu of `parent`, which sits at `depth`
    fn start_lvl(&self, output: &mut String, depth: usize, parent: &MenuItem);

    /// Close the submenu of `parent`
    fn end_lvl(&self, output: &mut String, depth: usize, parent: &MenuItem);

    /// Open an element
    fn start_el(&self, output: &mut String, node: &Node<'_>);

    /// Close an element
    fn end_el(&self, output: &mut String, node: &Node<'_>);
}

/// Walk `items` depth-first, feeding `walker`, and return the produced markup.
///
/// Siblings are visited in input order. Each child list is consumed the first
/// time its parent is rendered, so every item is emitted at most once even
/// when parent references form a cycle.
pub fn walk<W: Walker + ?Sized>(walker: &W, items: &[MenuItem], limit: DepthLimit) -> String {
    let mut output = String::new();

    if limit == DepthLimit::Flat {
        for item in items {
            let node = Node {
                item,
                depth: 0,
                has_children: false,
            };
            walker.start_el(&mut output, &node);
            walker.end_el(&mut output, &node);
        }
        return output;
    }

    let tree = MenuTree::build(items);
    let mut traversal = Traversal {
        walker,
        tree: &tree,
        pending: tree.child_lists().clone(),
        limit,
    };

    for &idx in tree.roots() {
        traversal.display_element(idx, 0, &mut output);
    }

    if limit == DepthLimit::Unlimited && !traversal.pending.is_empty() {
        let orphans: usize = traversal.pending.values().map(Vec::len).sum();
        tracing::warn!(
            orphans,
            "menu items reference missing parents; rendering them at the top level"
        );
        while let Some((parent, children)) = traversal.pending.shift_remove_index(0) {
            tracing::debug!(parent, count = children.len(), "rendering orphaned items");
            for idx in children {
                traversal.display_element(idx, 0, &mut output);
            }
        }
    }

    output
}

struct Traversal<'t, 'a, W: ?Sized> {
    walker: &'t W,
    tree: &'t MenuTree<'a>,
    pending: IndexMap<u64, Vec<usize>>,
    limit: DepthLimit,
}

impl<W: Walker + ?Sized> Traversal<'_, '_, W> {
    fn display_element(&mut self, idx: usize, depth: usize, output: &mut String) {
        let item = self.tree.item(idx);
        let has_children = self
            .pending
            .get(&item.id)
            .is_some_and(|children| !children.is_empty());
        let node = Node {
            item,
            depth,
            has_children,
        };

        self.walker.start_el(output, &node);

        if has_children && self.limit.descends(depth) {
            if let Some(children) = self.pending.shift_remove(&item.id) {
                self.walker.start_lvl(output, depth, item);
                for child in children {
                    self.display_element(child, depth + 1, output);
                }
                self.walker.end_lvl(output, depth, item);
            }
        }

        self.walker.end_el(output, &node);
    }
}
