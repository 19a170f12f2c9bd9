//! Base-type state shared by instants and periods.

use serde::{Deserialize, Serialize};

/// Identity and formatting state every time object carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeMetadata {
    /// Document-scoped identifier of the time element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gml_id: Option<String>,
    /// Format pattern the position formatter should apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
}

impl TimeMetadata {
    pub fn is_empty(&self) -> bool {
        self.gml_id.is_none() && self.time_format.is_none()
    }
}
