//! HTML format implementation
//!
//! Strategy: direct forest traversal, one `<ul>` per sibling sequence.
//!
//! # Data Model
//!
//! | Tree element            | HTML                                                  |
//! |-------------------------|-------------------------------------------------------|
//! | sibling sequence        | `<ul class="depth-N">`, plus the root class at depth 0 |
//! | node                    | `<li>`                                                |
//! | folder (children: Some) | `<i class="icon-folder-close"></i>`                   |
//! | file (children: None)   | `<i class="icon-file-alt"></i>`                       |
//! | name                    | `<span class="name">…</span>`                         |
//!
//! The depth class of a list comes from its first node. An empty folder gets the folder
//! icon but no nested list.
//!
//! Names are written verbatim unless `escape_names` is set: the outline is authored
//! content, and escaping it is left to the site owner.
//!
//! # Example
//!
//! ```text
//! <ul class="depth-0 folder-tree">
//!   <li>
//!     <i class="icon-folder-close"></i><span class="name">pages</span>
//!     <ul class="depth-1">
//!       <li><i class="icon-file-alt"></i><span class="name">about.md</span></li>
//!     </ul>
//!   </li>
//!   <li><i class="icon-folder-close"></i><span class="name">posts</span></li>
//! </ul>
//! ```
//!
//! That is the `pretty` layout; the default output is the same markup on a single line.

use crate::outline::building::TreeNode;
use crate::outline::formats::registry::{FormatError, Formatter};
use crate::outline::parsing::trim_name;
use serde::Deserialize;
use std::borrow::Cow;

/// Knobs for the generated markup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Extra class on the outermost (depth 0) list
    pub root_class: String,
    pub folder_icon: String,
    pub file_icon: String,
    /// HTML-escape names instead of inserting them verbatim
    pub escape_names: bool,
    /// Indented, one-tag-per-line output
    pub pretty: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            root_class: "folder-tree".to_string(),
            folder_icon: "icon-folder-close".to_string(),
            file_icon: "icon-file-alt".to_string(),
            escape_names: false,
            pretty: false,
        }
    }
}

/// Render a forest with the default options.
pub fn render(forest: &[TreeNode]) -> String {
    render_with(forest, &HtmlOptions::default())
}

/// Render a forest as nested `<ul>` markup. An empty forest renders as an empty string.
pub fn render_with(forest: &[TreeNode], options: &HtmlOptions) -> String {
    let mut output = String::new();
    if options.pretty {
        write_pretty(&mut output, forest, options, 0);
    } else {
        write_compact(&mut output, forest, options);
    }
    output
}

fn list_classes(nodes: &[TreeNode], options: &HtmlOptions) -> Option<String> {
    let depth = nodes.first()?.depth;
    let mut classes = format!("depth-{depth}");
    if depth == 0 && !options.root_class.is_empty() {
        classes.push(' ');
        classes.push_str(&options.root_class);
    }
    Some(classes)
}

/// Icon and name markup for one node
fn label(node: &TreeNode, options: &HtmlOptions) -> String {
    let icon = if node.is_folder() {
        &options.folder_icon
    } else {
        &options.file_icon
    };
    let name = trim_name(&node.name);
    let name = if options.escape_names {
        html_escape::encode_text(name)
    } else {
        Cow::Borrowed(name)
    };
    format!("<i class=\"{icon}\"></i><span class=\"name\">{name}</span>")
}

fn write_compact(output: &mut String, nodes: &[TreeNode], options: &HtmlOptions) {
    let Some(classes) = list_classes(nodes, options) else {
        return;
    };

    output.push_str(&format!("<ul class=\"{classes}\">"));
    for node in nodes {
        output.push_str("<li>");
        output.push_str(&label(node, options));
        let children = node.child_nodes();
        if !children.is_empty() {
            write_compact(output, children, options);
        }
        output.push_str("</li>");
    }
    output.push_str("</ul>");
}

fn write_pretty(output: &mut String, nodes: &[TreeNode], options: &HtmlOptions, level: usize) {
    let Some(classes) = list_classes(nodes, options) else {
        return;
    };
    let pad = "  ".repeat(level);

    output.push_str(&format!("{pad}<ul class=\"{classes}\">\n"));
    for node in nodes {
        let children = node.child_nodes();
        if children.is_empty() {
            output.push_str(&format!("{pad}  <li>{}</li>\n", label(node, options)));
        } else {
            output.push_str(&format!("{pad}  <li>\n"));
            output.push_str(&format!("{pad}    {}\n", label(node, options)));
            write_pretty(output, children, options, level + 2);
            output.push_str(&format!("{pad}  </li>\n"));
        }
    }
    output.push_str(&format!("{pad}</ul>\n"));
}

/// Formatter producing nested HTML lists
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlFormatter { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, forest: &[TreeNode]) -> Result<String, FormatError> {
        Ok(render_with(forest, &self.options))
    }

    fn description(&self) -> &str {
        "Nested HTML unordered lists"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<TreeNode> {
        vec![
            TreeNode::folder("pages", 0, vec![TreeNode::file("about.md", 1)]),
            TreeNode::folder("posts", 0, vec![]),
        ]
    }

    #[test]
    fn test_render_compact() {
        insta::assert_snapshot!(
            render(&sample_forest()),
            @r#"<ul class="depth-0 folder-tree"><li><i class="icon-folder-close"></i><span class="name">pages</span><ul class="depth-1"><li><i class="icon-file-alt"></i><span class="name">about.md</span></li></ul></li><li><i class="icon-folder-close"></i><span class="name">posts</span></li></ul>"#
        );
    }

    #[test]
    fn test_render_pretty() {
        let options = HtmlOptions {
            pretty: true,
            ..HtmlOptions::default()
        };
        let expected = concat!(
            "<ul class=\"depth-0 folder-tree\">\n",
            "  <li>\n",
            "    <i class=\"icon-folder-close\"></i><span class=\"name\">pages</span>\n",
            "    <ul class=\"depth-1\">\n",
            "      <li><i class=\"icon-file-alt\"></i><span class=\"name\">about.md</span></li>\n",
            "    </ul>\n",
            "  </li>\n",
            "  <li><i class=\"icon-folder-close\"></i><span class=\"name\">posts</span></li>\n",
            "</ul>\n",
        );
        assert_eq!(render_with(&sample_forest(), &options), expected);
    }

    #[test]
    fn test_empty_folder_has_folder_icon_and_no_list() {
        let html = render(&[TreeNode::folder("posts", 0, vec![])]);
        assert!(html.contains("icon-folder-close"));
        assert_eq!(html.matches("<ul").count(), 1);
    }

    #[test]
    fn test_depth_class_follows_first_node() {
        let html = render(&[TreeNode::file("hi.txt", 3)]);
        assert!(html.starts_with("<ul class=\"depth-3\">"));
    }

    #[test]
    fn test_names_are_trimmed() {
        let html = render(&[TreeNode::file("  about.md \t", 0)]);
        assert!(html.contains("<span class=\"name\">about.md</span>"));
    }

    #[test]
    fn test_no_break_space_stays_in_name() {
        let html = render(&[TreeNode::file("\u{a0}about.md", 0)]);
        assert!(html.contains("<span class=\"name\">\u{a0}about.md</span>"));
    }

    #[test]
    fn test_names_are_verbatim_by_default() {
        let html = render(&[TreeNode::file("<b>.md", 0)]);
        assert!(html.contains("<span class=\"name\"><b>.md</span>"));
    }

    #[test]
    fn test_escape_names() {
        let options = HtmlOptions {
            escape_names: true,
            ..HtmlOptions::default()
        };
        let html = render_with(&[TreeNode::file("a&b<c>.md", 0)], &options);
        assert!(html.contains("<span class=\"name\">a&amp;b&lt;c&gt;.md</span>"));
    }

    #[test]
    fn test_custom_classes() {
        let options = HtmlOptions {
            root_class: String::new(),
            folder_icon: "dir".to_string(),
            file_icon: "doc".to_string(),
            ..HtmlOptions::default()
        };
        let html = render_with(&sample_forest(), &options);
        assert!(html.starts_with("<ul class=\"depth-0\">"));
        assert!(html.contains("<i class=\"dir\"></i>"));
        assert!(html.contains("<i class=\"doc\"></i>"));
    }

    #[test]
    fn test_empty_forest_renders_nothing() {
        assert_eq!(render(&[]), "");
        let options = HtmlOptions {
            pretty: true,
            ..HtmlOptions::default()
        };
        assert_eq!(render_with(&[], &options), "");
    }

    #[test]
    fn test_html_formatter() {
        let formatter = HtmlFormatter::default();
        assert_eq!(formatter.name(), "html");
        assert_eq!(formatter.options(), &HtmlOptions::default());
        assert_eq!(
            formatter.serialize(&sample_forest()).unwrap(),
            render(&sample_forest())
        );
    }
}
