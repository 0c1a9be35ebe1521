use common::model::catalog::ColumnCatalog;
use common::model::column::ColumnKind;

#[derive(Clone)]
pub enum Msg {
    CatalogLoaded(ColumnCatalog),
    IndustriesLoaded(Vec<String>),
    ToggleOptional(String),
    OpenDialog,
    CloseDialog,
    SetDraftName(String),
    SetDraftKind(ColumnKind),
    SetDraftOptions(String),
    AddCustomColumn,
    RemoveCustomColumn(usize),
    Generate,
    GenerationFinished(Result<(), String>),
}
