//! Structural checks for menu item lists.
//!
//! Rendering never fails on a malformed list; these checks report what the
//! renderer will silently work around.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::models::MenuItem;

/// A structural problem in a menu item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeIssue {
    /// Several items share an id; children attach to the first one rendered
    DuplicateId { id: u64, count: usize },
    /// Item names itself as its parent
    SelfParent { id: u64 },
    /// Parent id does not match any item; the item renders at the top level
    DanglingParent { id: u64, parent: u64 },
    /// Parent references loop; listed in parent-chain order
    Cycle { ids: Vec<u64> },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, count } => {
                write!(f, "id {} is used by {} items", id, count)
            }
            Self::SelfParent { id } => write!(f, "item {} is its own parent", id),
            Self::DanglingParent { id, parent } => {
                write!(f, "item {} references missing parent {}", id, parent)
            }
            Self::Cycle { ids } => {
                let chain: Vec<String> = ids.iter().map(u64::to_string).collect();
                write!(f, "parent cycle: {}", chain.join(" -> "))
            }
        }
    }
}

/// Check a flat item list. Issues are ordered by kind, then by input position.
pub fn diagnose(items: &[MenuItem]) -> Vec<TreeIssue> {
    let mut issues = Vec::new();

    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut position: HashMap<u64, usize> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        *counts.entry(item.id).or_default() += 1;
        position.entry(item.id).or_insert(idx);
    }

    let mut reported = HashSet::new();
    for item in items {
        let count = counts[&item.id];
        if count > 1 && reported.insert(item.id) {
            issues.push(TreeIssue::DuplicateId { id: item.id, count });
        }
    }

    for item in items {
        match item.parent_id() {
            Some(parent) if parent == item.id => {
                issues.push(TreeIssue::SelfParent { id: item.id });
            }
            Some(parent) if !position.contains_key(&parent) => {
                issues.push(TreeIssue::DanglingParent {
                    id: item.id,
                    parent,
                });
            }
            _ => {}
        }
    }

    // Parent pointers form a functional graph: follow each chain once and
    // report a loop the first time a walk runs into itself.
    let mut finished: HashSet<usize> = HashSet::new();
    for start in 0..items.len() {
        let mut path: Vec<usize> = Vec::new();
        let mut on_path: HashMap<usize, usize> = HashMap::new();
        let mut current = Some(start);

        while let Some(idx) = current {
            if finished.contains(&idx) {
                break;
            }
            if let Some(&at) = on_path.get(&idx) {
                if path.len() - at > 1 {
                    issues.push(TreeIssue::Cycle {
                        ids: path[at..].iter().map(|&i| items[i].id).collect(),
                    });
                }
                break;
            }
            on_path.insert(idx, path.len());
            path.push(idx);
            current = items[idx]
                .parent_id()
                .and_then(|parent| position.get(&parent).copied());
        }

        finished.extend(path);
    }

    issues
}
