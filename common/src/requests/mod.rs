use crate::model::column::CustomColumn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request payload for the spreadsheet generation endpoint.
///
/// Both lists are optional on the wire and default to empty. Keys in
/// `selected_optional_columns` are not validated: unknown keys become literal
/// headers. The snake_case names used by the first version of the client are
/// accepted as aliases.
pub struct GenerationRequest {
    #[serde(default, alias = "dynamic_columns")]
    pub selected_optional_columns: Vec<String>,
    #[serde(default, alias = "custom_columns")]
    pub custom_columns: Vec<CustomColumn>,
}
