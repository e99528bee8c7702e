//! Bootstrap 5 navbar walker.
//!
//! Renders `<li>` elements and nested `<ul class="dropdown-menu">` submenus
//! for the Bootstrap 5.3 navbar and dropdown components, three or more
//! levels deep. The caller wraps the fragment in its own `<ul>` (see
//! [`wrap_menu`]). Dropdown behaviour itself is left to Bootstrap's script.

use std::borrow::Cow;

use crate::classify::{classify, element_classes, ItemKind};
use crate::escaping::{escape_attr, escape_html, escape_url};
use crate::models::MenuItem;
use crate::walker::{walk, DepthLimit, Node, Walker};

/// Per-render options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderArgs {
    /// Markup placed before each element body
    pub before: String,
    /// Markup placed after each element body
    pub after: String,
    /// Markup placed inside links, before the title
    pub link_before: String,
    /// Markup placed inside links, after the title
    pub link_after: String,
    /// How many levels to render
    pub depth: DepthLimit,
}

/// Extension points applied while rendering.
///
/// Both methods default to the identity.
pub trait NavHooks {
    /// Adjust an item's title before it is escaped
    fn title<'a>(&self, item: &'a MenuItem) -> Cow<'a, str> {
        Cow::Borrowed(&item.title)
    }

    /// Adjust the rendered body of an element (everything inside the `<li>`
    /// except its submenu)
    fn element_html(&self, html: String, _item: &MenuItem, _depth: usize) -> String {
        html
    }
}

/// Hooks that change nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl NavHooks for DefaultHooks {}

/// Walker producing Bootstrap 5 navbar markup
#[derive(Debug, Clone)]
pub struct Bootstrap5Walker<H = DefaultHooks> {
    args: RenderArgs,
    hooks: H,
}

impl Bootstrap5Walker {
    /// Create a walker with the given options
    pub fn new(args: RenderArgs) -> Self {
        Self {
            args,
            hooks: DefaultHooks,
        }
    }
}

impl<H: NavHooks> Bootstrap5Walker<H> {
    /// Create a walker with custom hooks
    pub fn with_hooks(args: RenderArgs, hooks: H) -> Self {
        Self { args, hooks }
    }

    /// Render the inner `<li>`/`<ul>` fragment for a flat item list
    pub fn render(&self, items: &[MenuItem]) -> String {
        walk(self, items, self.args.depth)
    }

    fn link_attributes(&self, node: &Node<'_>, active: bool) -> String {
        let item = node.item;
        let mut atts: Vec<(&str, &str)> = vec![
            ("title", item.attr_title.as_deref().unwrap_or_default()),
            ("target", item.target.as_deref().unwrap_or_default()),
            ("rel", item.rel.as_deref().unwrap_or_default()),
            ("href", item.url.as_str()),
        ];

        let mut link_classes = vec![if node.depth == 0 {
            "nav-link"
        } else {
            "dropdown-item"
        }];

        if node.has_children {
            link_classes.push("dropdown-toggle");
            atts.push(("data-bs-toggle", "dropdown"));
            atts.push(("role", "button"));
            atts.push(("aria-expanded", "false"));
            atts.push(("aria-haspopup", "true"));
        }

        if active {
            link_classes.push("active");
            atts.push(("aria-current", "page"));
        }

        let class = link_classes.join(" ");
        atts.push(("class", &class));

        let mut attributes = String::new();
        for (name, value) in atts {
            if value.is_empty() {
                continue;
            }
            let value = if name == "href" {
                escape_url(value)
            } else {
                escape_attr(value)
            };
            attributes.push_str(&format!(" {}=\"{}\"", name, value));
        }
        attributes
    }
}

impl<H: NavHooks> Walker for Bootstrap5Walker<H> {
    fn start_lvl(&self, output: &mut String, depth: usize, parent: &MenuItem) {
        let indent = "\t".repeat(depth);
        let mut classes = vec!["dropdown-menu".to_string(), format!("depth_{}", depth)];
        classes.extend(parent.alignment_classes().map(str::to_string));

        output.push_str(&format!(
            "\n{}<ul class=\"{}\" data-bs-popper=\"static\">\n",
            indent,
            escape_attr(&classes.join(" "))
        ));
    }

    fn end_lvl(&self, output: &mut String, depth: usize, _parent: &MenuItem) {
        output.push_str(&"\t".repeat(depth));
        output.push_str("</ul>\n");
    }

    fn start_el(&self, output: &mut String, node: &Node<'_>) {
        let item = node.item;
        let classes = element_classes(item, node.depth, node.has_children);
        let active = classes.iter().any(|c| c == "active");

        output.push_str(&"\t".repeat(node.depth));
        output.push_str(&format!(
            "<li id=\"{}\" class=\"{}\">",
            escape_attr(&format!("menu-item-{}", item.id)),
            escape_attr(&classes.join(" "))
        ));

        let title = self.hooks.title(item);
        let mut html = self.args.before.clone();
        match classify(item) {
            ItemKind::Divider => html.push_str("<hr class=\"dropdown-divider\">"),
            ItemKind::Header => html.push_str(&format!(
                "<h6 class=\"dropdown-header\">{}</h6>",
                escape_html(&title)
            )),
            ItemKind::Link => {
                html.push_str(&format!("<a{}>", self.link_attributes(node, active)));
                html.push_str(&self.args.link_before);
                html.push_str(&escape_html(&title));
                html.push_str(&self.args.link_after);
                html.push_str("</a>");
            }
        }
        html.push_str(&self.args.after);

        output.push_str(&self.hooks.element_html(html, item, node.depth));
    }

    fn end_el(&self, output: &mut String, _node: &Node<'_>) {
        output.push_str("</li>\n");
    }
}

/// Wrap a rendered fragment in the outer menu list
pub fn wrap_menu(fragment: &str, menu_id: Option<&str>, menu_class: &str) -> String {
    let id = menu_id
        .filter(|id| !id.is_empty())
        .map(|id| format!(" id=\"{}\"", escape_attr(id)))
        .unwrap_or_default();
    format!(
        "<ul{} class=\"{}\">\n{}</ul>\n",
        id,
        escape_attr(menu_class),
        fragment
    )
}
