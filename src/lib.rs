//! # folder-tree
//!
//! Turns an indented plain-text outline into a nested HTML folder tree, for use as a
//! template block helper in a static-site generator.
//!
//! ```text
//! pages
//!   about.md
//! posts
//! ```
//!
//! becomes
//!
//! ```text
//! <ul class="depth-0 folder-tree"><li><i class="icon-folder-close"></i><span class="name">pages</span>...
//! ```
//!
//! The work happens in three stages, each in its own module under [`outline`]:
//! parsing (text to flat records), building (records to a forest) and formatting
//! (forest to HTML or another registered format).

pub mod outline;

pub use outline::error::{FolderTreeError, ParseError};
pub use outline::helper::{folder_tree, FolderTree};
