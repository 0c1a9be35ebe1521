//! Component state for the template generator.

use super::draft::ColumnDraft;
use common::model::catalog::ColumnCatalog;
use common::model::column::CustomColumn;
use common::requests::GenerationRequest;

/// Main state container for the `TemplateGeneratorComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct TemplateGeneratorComponent {
    /// Required headers and optional columns as served by `/api/columns`.
    pub catalog: ColumnCatalog,

    /// Choices of the industry dropdown, shown next to the required columns.
    pub industries: Vec<String>,

    /// Keys of the ticked optional columns, in the order they were ticked.
    pub selected_optional: Vec<String>,

    /// Custom columns added through the dialog, in output order.
    pub custom_columns: Vec<CustomColumn>,

    /// Contents of the "add custom column" dialog.
    pub draft: ColumnDraft,

    pub show_dialog: bool,

    /// A generation request is in flight; the button is disabled meanwhile.
    pub generating: bool,

    /// Guard to avoid fetching the catalogs more than once.
    pub loaded: bool,
}

impl TemplateGeneratorComponent {
    pub fn new() -> Self {
        Self {
            catalog: ColumnCatalog::default(),
            industries: Vec::new(),
            selected_optional: Vec::new(),
            custom_columns: Vec::new(),
            draft: ColumnDraft::default(),
            show_dialog: false,
            generating: false,
            loaded: false,
        }
    }

    /// The payload for `POST /api/generate-excel` reflecting the current choices.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            selected_optional_columns: self.selected_optional.clone(),
            custom_columns: self.custom_columns.clone(),
        }
    }
}
