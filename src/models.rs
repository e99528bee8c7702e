//! Core data models for navwalker
//!
//! - `MenuItem`: one navigable entry (link, divider or header) with a parent reference
//! - Class-name constants shared by the renderer, the active trail and the tests

use serde::{Deserialize, Deserializer, Serialize};

/// Marks the item whose url is the page being displayed
pub const CURRENT_ITEM: &str = "current-menu-item";
/// Marks the direct parent of the current item
pub const CURRENT_PARENT: &str = "current-menu-parent";
/// Marks every ancestor of the current item
pub const CURRENT_ANCESTOR: &str = "current-menu-ancestor";

/// Renders the item as a `<hr>` separator
pub const DIVIDER_CLASS: &str = "dropdown-divider";
/// Renders the item as a non-interactive `<h6>` heading
pub const HEADER_CLASS: &str = "dropdown-header";

/// Dropdown alignment classes that are copied from an item onto its submenu.
pub const ALIGNMENT_CLASSES: [&str; 12] = [
    "dropdown-menu-start",
    "dropdown-menu-end",
    "dropdown-menu-sm-start",
    "dropdown-menu-sm-end",
    "dropdown-menu-md-start",
    "dropdown-menu-md-end",
    "dropdown-menu-lg-start",
    "dropdown-menu-lg-end",
    "dropdown-menu-xl-start",
    "dropdown-menu-xl-end",
    "dropdown-menu-xxl-start",
    "dropdown-menu-xxl-end",
];

/// A single menu entry as exported by the navigation source.
///
/// Field aliases (`ID`, `xfn`, `menu_item_parent`) accept CMS exports as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier
    #[serde(alias = "ID")]
    pub id: u64,

    /// Visible link text
    #[serde(default)]
    pub title: String,

    /// Link destination
    #[serde(default)]
    pub url: String,

    /// Link `target` attribute (e.g. `_blank`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Link `rel` attribute (e.g. `nofollow`)
    #[serde(default, alias = "xfn", skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// Link `title` attribute (tooltip text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_title: Option<String>,

    /// CSS classes, either a list or a space-separated string
    #[serde(default, deserialize_with = "deserialize_classes")]
    pub classes: Vec<String>,

    /// Parent item id; `None` and `Some(0)` both mean top level
    #[serde(
        default,
        alias = "menu_item_parent",
        deserialize_with = "deserialize_parent",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<u64>,
}

impl MenuItem {
    /// Create a top-level item with a title and url
    pub fn new(id: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            target: None,
            rel: None,
            attr_title: None,
            classes: Vec::new(),
            parent: None,
        }
    }

    /// Set the parent item
    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Append a CSS class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the link target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the link relationship
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Set the tooltip text
    pub fn with_attr_title(mut self, attr_title: impl Into<String>) -> Self {
        self.attr_title = Some(attr_title.into());
        self
    }

    /// Parent id, with `0` folded into `None`
    pub fn parent_id(&self) -> Option<u64> {
        self.parent.filter(|&p| p != 0)
    }

    /// Check whether the item carries a class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class unless already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Alignment classes from the allow-list, in the item's own order
    pub fn alignment_classes(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|c| ALIGNMENT_CLASSES.contains(c))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassesDe {
    List(Vec<String>),
    Text(String),
}

fn deserialize_classes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ClassesDe::deserialize(deserializer)? {
        ClassesDe::List(classes) => classes,
        ClassesDe::Text(text) => text.split_whitespace().map(str::to_string).collect(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParentDe {
    Number(u64),
    Text(String),
}

/// CMS exports store the parent id as a string ("0" for top level).
fn deserialize_parent<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ParentDe>::deserialize(deserializer)? {
        None => Ok(None),
        Some(ParentDe::Number(n)) => Ok(Some(n)),
        Some(ParentDe::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(ParentDe::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid parent id '{}'", s))),
    }
}
