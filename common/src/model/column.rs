use serde::{Deserialize, Serialize};

/// How the cells of a custom column are filled in by whoever uses the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Any text is accepted.
    #[default]
    Free,
    /// Cells are restricted to the column's option list.
    Dropdown,
}

/// A caller-defined column appended after the catalog columns.
///
/// `name` is both the header text and the column's identity in the request.
/// `options` only matters when `kind` is [`ColumnKind::Dropdown`]; older clients
/// send `type` instead of `kind`, which is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomColumn {
    pub name: String,
    #[serde(default, alias = "type")]
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl CustomColumn {
    pub fn free(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Free,
            options: None,
        }
    }

    pub fn dropdown<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: ColumnKind::Dropdown,
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }

    /// The option list to constrain this column with, if it has one.
    ///
    /// Free columns never have one, whatever `options` holds.
    pub fn dropdown_options(&self) -> Option<&[String]> {
        match (self.kind, &self.options) {
            (ColumnKind::Dropdown, Some(options)) if !options.is_empty() => Some(options),
            _ => None,
        }
    }
}
