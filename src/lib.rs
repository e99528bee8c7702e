//! navwalker - hierarchical menu rendering for Bootstrap 5 navbars
//!
//! Takes a flat, ordered list of menu items whose parent references describe
//! a tree, and renders the nested `<li>`/`<ul class="dropdown-menu">` markup
//! the Bootstrap 5.3 navbar and dropdown components expect.
//!
//! ```
//! use navwalker::{render, MenuItem};
//!
//! let items = vec![
//!     MenuItem::new(1, "Home", "/"),
//!     MenuItem::new(2, "Shop", "/shop"),
//!     MenuItem::new(3, "Shoes", "/shop/shoes").with_parent(2),
//! ];
//! let html = render(&items);
//! assert!(html.contains("dropdown-toggle"));
//! ```

pub mod active;
pub mod bootstrap;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod escaping;
pub mod loader;
pub mod models;
pub mod tree;
pub mod walker;

// Re-exports for convenience
pub use active::mark_current;
pub use bootstrap::{wrap_menu, Bootstrap5Walker, DefaultHooks, NavHooks, RenderArgs};
pub use classify::{classify, ItemKind};
pub use config::{Config, ConfigWarning};
pub use diagnostics::{diagnose, TreeIssue};
pub use error::{NavError, NavResult};
pub use loader::{load_menu, parse_menu, MenuFormat};
pub use models::MenuItem;
pub use tree::MenuTree;
pub use walker::{walk, DepthLimit, Node, Walker};

/// Render the inner menu fragment with default options
pub fn render(items: &[MenuItem]) -> String {
    Bootstrap5Walker::new(RenderArgs::default()).render(items)
}

/// Render the inner menu fragment with the given options
pub fn render_with(items: &[MenuItem], args: &RenderArgs) -> String {
    Bootstrap5Walker::new(args.clone()).render(items)
}
