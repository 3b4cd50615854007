//! Output format implementations for built forests
//!
//! - html: nested unordered lists, the block helper's output
//! - treeviz: box-drawing tree for terminals
//! - json / yaml: serde dumps of the forest

pub mod html;
pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use html::{render, render_with, HtmlFormatter, HtmlOptions};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
