use serde::{Deserialize, Serialize};

/// One entry of the optional-column picker: the key sent back in a
/// [`crate::requests::GenerationRequest`] and the header text it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalColumn {
    pub key: String,
    pub label: String,
}

/// Everything a client needs to render the column picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCatalog {
    /// Headers every generated sheet starts with, in output order.
    pub required: Vec<String>,
    /// Columns the caller may opt into.
    pub optional: Vec<OptionalColumn>,
}
