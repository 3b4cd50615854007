//! JSON dump of the forest
//!
//! Files have no `children` key; folders always have one, possibly empty.

use crate::outline::building::TreeNode;
use crate::outline::formats::registry::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, forest: &[TreeNode]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(forest)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Forest as pretty-printed JSON"
    }
}
