use common::model::column::{ColumnKind, CustomColumn};

/// What the user has typed into the "add custom column" dialog so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDraft {
    pub name: String,
    pub kind: ColumnKind,
    /// Comma separated choices, only used for dropdown columns.
    pub options_text: String,
}

impl ColumnDraft {
    /// The typed choices, trimmed, without empty entries.
    pub fn options(&self) -> Vec<String> {
        self.options_text
            .split(',')
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Turns the draft into a column, or explains (in the UI language) why it can't.
    pub fn build(&self) -> Result<CustomColumn, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("カラム名を入力してください。");
        }
        match self.kind {
            ColumnKind::Free => Ok(CustomColumn::free(name)),
            ColumnKind::Dropdown => {
                let options = self.options();
                if options.is_empty() {
                    return Err("プルダウンの選択肢を1つ以上入力してください。");
                }
                Ok(CustomColumn::dropdown(name, options))
            }
        }
    }
}

/// Ticks `key` if it is not selected yet, unticks it otherwise. Newly ticked
/// keys go to the end so the sheet follows the order of the clicks.
pub fn toggle_key(selected: &mut Vec<String>, key: &str) {
    if let Some(pos) = selected.iter().position(|k| k == key) {
        selected.remove(pos);
    } else {
        selected.push(key.to_string());
    }
}
