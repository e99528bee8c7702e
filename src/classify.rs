//! Per-item classification.
//!
//! Decides once per item what kind of element it renders as and which
//! classes its `<li>` carries, so the markup code never sniffs class lists.

use crate::models::{
    MenuItem, CURRENT_ANCESTOR, CURRENT_ITEM, CURRENT_PARENT, DIVIDER_CLASS, HEADER_CLASS,
};

/// What an item renders as inside its `<li>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// `<a>` element
    Link,
    /// `<hr class="dropdown-divider">`
    Divider,
    /// `<h6 class="dropdown-header">`
    Header,
}

/// Classify an item by its marker classes. A divider wins over a header.
pub fn classify(item: &MenuItem) -> ItemKind {
    if item.has_class(DIVIDER_CLASS) {
        ItemKind::Divider
    } else if item.has_class(HEADER_CLASS) {
        ItemKind::Header
    } else {
        ItemKind::Link
    }
}

/// Whether the item is the current page, its parent or one of its ancestors
pub fn is_active(item: &MenuItem) -> bool {
    [CURRENT_ITEM, CURRENT_PARENT, CURRENT_ANCESTOR]
        .iter()
        .any(|marker| item.has_class(marker))
}

/// Classes for an item's `<li>`.
///
/// Own classes first (empty ones dropped), then the id class, the
/// depth-dependent dropdown markers and finally `active`.
pub fn element_classes(item: &MenuItem, depth: usize, has_children: bool) -> Vec<String> {
    let mut classes: Vec<String> = item
        .classes
        .iter()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect();

    classes.push(format!("menu-item-{}", item.id));

    if depth == 0 {
        classes.push("nav-item".to_string());
        if has_children {
            classes.push("dropdown".to_string());
        }
    } else if has_children {
        classes.push("dropdown-submenu".to_string());
    }

    if is_active(item) {
        classes.push("active".to_string());
    }

    classes
}
