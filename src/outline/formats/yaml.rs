//! YAML dump of the forest

use crate::outline::building::TreeNode;
use crate::outline::formats::registry::{FormatError, Formatter};

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, forest: &[TreeNode]) -> Result<String, FormatError> {
        serde_yaml::to_string(forest).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Forest as YAML"
    }
}
