//! Format registry for forest serialization
//!
//! Each output format implements [`Formatter`] and is looked up by name in a
//! [`FormatRegistry`]. The HTML formatter is the one the block helper uses; the others
//! exist for inspecting outlines from the command line.

use crate::outline::building::TreeNode;
use crate::outline::formats::html::{HtmlFormatter, HtmlOptions};
use crate::outline::formats::json::JsonFormatter;
use crate::outline::formats::treeviz::TreevizFormatter;
use crate::outline::formats::yaml::YamlFormatter;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializes a forest into one output format
pub trait Formatter: Send + Sync {
    /// The name this format is selected by (e.g. "html", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, forest: &[TreeNode]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of forest formatters.
///
/// Registering a formatter under a name that is already taken replaces the old one.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a forest using the named format
    pub fn serialize(&self, forest: &[TreeNode], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(forest)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters and default HTML options
    pub fn with_defaults() -> Self {
        Self::with_html_options(HtmlOptions::default())
    }

    /// Create a registry with the built-in formatters, rendering HTML with `options`
    pub fn with_html_options(options: HtmlOptions) -> Self {
        let mut registry = Self::new();

        registry.register(HtmlFormatter::new(options));
        registry.register(TreevizFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
