//! Template block helper
//!
//! The host template engine hands over the raw body of a `folder_tree` block and inlines
//! whatever string comes back:
//!
//! ```text
//! {{# folder_tree }}
//!   pages
//!     about.md
//!   posts
//! {{/ folder_tree }}
//! ```
//!
//! [`folder_tree`] runs the whole pipeline with default options. [`FolderTree`] does the
//! same with custom [`HtmlOptions`]; it holds no state between calls, so one instance can
//! serve every block on a site.

use crate::outline::building::build;
use crate::outline::config::FolderTreeConfig;
use crate::outline::error::FolderTreeError;
use crate::outline::formats::html::{HtmlFormatter, HtmlOptions};
use crate::outline::formats::Formatter;
use crate::outline::parsing::parse;
use log::debug;

/// Render a block body as an HTML folder tree.
///
/// An illegal indentation aborts the whole block; no partial markup is produced.
pub fn folder_tree(text: &str) -> Result<String, FolderTreeError> {
    FolderTree::default().render(text)
}

/// Block helper configured with markup options
#[derive(Debug, Clone, Default)]
pub struct FolderTree {
    formatter: HtmlFormatter,
}

impl FolderTree {
    pub fn new(options: HtmlOptions) -> Self {
        FolderTree {
            formatter: HtmlFormatter::new(options),
        }
    }

    pub fn from_config(config: &FolderTreeConfig) -> Self {
        Self::new(config.html.clone())
    }

    pub fn options(&self) -> &HtmlOptions {
        self.formatter.options()
    }

    pub fn render(&self, text: &str) -> Result<String, FolderTreeError> {
        let records = parse(text)?;
        debug!("parsed {} outline entries", records.len());
        let forest = build(records);
        let html = self.formatter.serialize(&forest)?;
        Ok(html)
    }
}
