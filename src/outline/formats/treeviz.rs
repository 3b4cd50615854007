//! Tree visualization for terminals
//!
//! ```text
//! ├─ 📁 pages
//! │ └─ 📄 about.md
//! ├─ 📁 posts
//! └─ 📁 essays
//!   └─ 📁 derp
//! ```
//!
//! Folders and files get the same icons as in HTML, just as glyphs. Empty folders show as
//! folders.

use crate::outline::building::TreeNode;
use crate::outline::formats::registry::{FormatError, Formatter};
use crate::outline::parsing::trim_name;

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

fn format_node(output: &mut String, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = if node.is_folder() {
        FOLDER_ICON
    } else {
        FILE_ICON
    };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon,
        trim_name(&node.name)
    ));

    let children = node.child_nodes();
    if !children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_nodes(output, children, &child_prefix);
    }
}

fn format_nodes(output: &mut String, nodes: &[TreeNode], prefix: &str) {
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        format_node(output, node, prefix, i + 1 == count);
    }
}

pub fn to_treeviz_str(forest: &[TreeNode]) -> String {
    let mut output = String::new();
    format_nodes(&mut output, forest, "");
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, forest: &[TreeNode]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(forest))
    }

    fn description(&self) -> &str {
        "Box-drawing tree with folder and file icons"
    }
}
