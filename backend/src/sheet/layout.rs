use super::dropdown::DropdownList;
use crate::catalog::{
    optional_label, INDUSTRIES, INDUSTRY_HEADER, REGIONS, REGION_KEY, REQUIRED_HEADERS,
};
use crate::error::GenerationError;
use common::requests::GenerationRequest;

/// Widest sheet the xlsx format can hold.
pub const MAX_COLUMNS: usize = 16_384;

/// One output column: its header text and, optionally, the list its data
/// cells are restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateColumn {
    pub header: String,
    pub dropdown: Option<DropdownList>,
}

/// The ordered columns of a template.
///
/// Dropdowns are bound to a column while the header row is being built, so
/// each column is addressed by its position. Two columns sharing a header text
/// stay independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetLayout {
    columns: Vec<TemplateColumn>,
}

impl SheetLayout {
    /// Required headers first, then the selected optional columns, then the
    /// custom columns, each group in request order.
    pub fn from_request(request: &GenerationRequest) -> Result<Self, GenerationError> {
        let count = REQUIRED_HEADERS.len()
            + request.selected_optional_columns.len()
            + request.custom_columns.len();
        if count > MAX_COLUMNS {
            return Err(GenerationError::TooManyColumns {
                count,
                limit: MAX_COLUMNS,
            });
        }

        let mut columns = Vec::with_capacity(count);

        for header in REQUIRED_HEADERS {
            let dropdown = if header == INDUSTRY_HEADER {
                Some(DropdownList::new(header, INDUSTRIES)?)
            } else {
                None
            };
            columns.push(TemplateColumn {
                header: header.to_string(),
                dropdown,
            });
        }

        for key in &request.selected_optional_columns {
            let label = optional_label(key);
            let dropdown = if key == REGION_KEY {
                Some(DropdownList::new(label, REGIONS)?)
            } else {
                None
            };
            columns.push(TemplateColumn {
                header: label.to_string(),
                dropdown,
            });
        }

        for custom in &request.custom_columns {
            let dropdown = match custom.dropdown_options() {
                Some(options) => Some(DropdownList::new(&custom.name, options)?),
                None => None,
            };
            columns.push(TemplateColumn {
                header: custom.name.clone(),
                // a dropdown with nothing to choose from is a free column
                dropdown: dropdown.filter(|list| !list.is_empty()),
            });
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[TemplateColumn] {
        &self.columns
    }

    pub fn header_row(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Columns with their zero-based sheet index.
    pub fn indexed_columns(&self) -> impl Iterator<Item = (u16, &TemplateColumn)> {
        // from_request caps the width at MAX_COLUMNS, so every index fits in a u16
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| (index as u16, column))
    }

    /// Constrained columns with their zero-based sheet index.
    pub fn dropdowns(&self) -> impl Iterator<Item = (u16, &DropdownList)> {
        self.indexed_columns()
            .filter_map(|(index, column)| column.dropdown.as_ref().map(|list| (index, list)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::column::{ColumnKind, CustomColumn};

    fn layout(optional: &[&str], custom: Vec<CustomColumn>) -> SheetLayout {
        let request = GenerationRequest {
            selected_optional_columns: optional.iter().map(|k| k.to_string()).collect(),
            custom_columns: custom,
        };
        SheetLayout::from_request(&request).expect("layout")
    }

    #[test]
    fn empty_request_yields_required_headers_only() {
        let layout = layout(&[], vec![]);
        assert_eq!(layout.header_row(), REQUIRED_HEADERS);

        let dropdowns: Vec<_> = layout.dropdowns().collect();
        assert_eq!(dropdowns.len(), 1);
        let (index, list) = dropdowns[0];
        assert_eq!(index, 4);
        assert_eq!(list.entries(), INDUSTRIES);
    }

    #[test]
    fn optional_keys_become_labels_in_request_order() {
        let layout = layout(&["email", "prefecture", "fax"], vec![]);
        assert_eq!(
            &layout.header_row()[5..],
            ["メールアドレス", "県域", "fax"]
        );
    }

    #[test]
    fn region_dropdown_only_when_prefecture_selected() {
        let without = layout(&["address"], vec![]);
        assert!(without.dropdowns().all(|(index, _)| index == 4));

        let with = layout(&["prefecture", "email"], vec![]);
        let regions: Vec<_> = with.dropdowns().filter(|(index, _)| *index == 5).collect();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].1.entries(), REGIONS);
    }

    #[test]
    fn custom_columns_follow_optional_columns() {
        let layout = layout(
            &["address"],
            vec![
                CustomColumn::dropdown("Budget", ["Low", "Mid", "High"]),
                CustomColumn::free("Notes"),
            ],
        );
        assert_eq!(&layout.header_row()[5..], ["住所", "Budget", "Notes"]);

        let budget = layout.columns()[6].dropdown.as_ref().expect("budget dropdown");
        assert_eq!(budget.entries(), ["Low", "Mid", "High"]);
        assert!(layout.columns()[7].dropdown.is_none());
    }

    #[test]
    fn dropdown_without_options_behaves_as_free() {
        let layout = layout(
            &[],
            vec![
                CustomColumn {
                    name: "Empty".to_string(),
                    kind: ColumnKind::Dropdown,
                    options: Some(vec![]),
                },
                CustomColumn {
                    name: "Missing".to_string(),
                    kind: ColumnKind::Dropdown,
                    options: None,
                },
                CustomColumn::dropdown("Blank", [" ", ""]),
            ],
        );
        assert_eq!(layout.columns().len(), 8);
        assert_eq!(layout.dropdowns().count(), 1);
    }

    #[test]
    fn same_named_columns_keep_their_own_dropdowns() {
        let layout = layout(
            &[],
            vec![
                CustomColumn::free("Status"),
                CustomColumn::dropdown("Status", ["Open", "Closed"]),
                CustomColumn::dropdown("Status", ["Yes", "No"]),
            ],
        );
        assert!(layout.columns()[5].dropdown.is_none());
        assert_eq!(
            layout.columns()[6].dropdown.as_ref().unwrap().entries(),
            ["Open", "Closed"]
        );
        assert_eq!(
            layout.columns()[7].dropdown.as_ref().unwrap().entries(),
            ["Yes", "No"]
        );
    }

    #[test]
    fn custom_column_named_like_a_catalog_label_gets_no_catalog_list() {
        let layout = layout(&[], vec![CustomColumn::free("県域")]);
        assert!(layout.columns()[5].dropdown.is_none());
    }

    #[test]
    fn invalid_option_fails_the_whole_layout() {
        let request = GenerationRequest {
            selected_optional_columns: vec![],
            custom_columns: vec![CustomColumn::dropdown("Price", ["1,000", "2,000"])],
        };
        assert!(matches!(
            SheetLayout::from_request(&request),
            Err(GenerationError::ReservedCharacterInOption { .. })
        ));
    }

    #[test]
    fn too_many_columns_is_rejected() {
        let request = GenerationRequest {
            selected_optional_columns: vec!["email".to_string(); MAX_COLUMNS],
            custom_columns: vec![],
        };
        assert!(matches!(
            SheetLayout::from_request(&request),
            Err(GenerationError::TooManyColumns { count, .. }) if count == MAX_COLUMNS + 5
        ));
    }

    #[test]
    fn widest_allowed_layout_is_accepted() {
        let request = GenerationRequest {
            selected_optional_columns: vec!["email".to_string(); MAX_COLUMNS - 5],
            custom_columns: vec![],
        };
        let layout = SheetLayout::from_request(&request).expect("layout");
        let (last, _) = layout.indexed_columns().last().unwrap();
        assert_eq!(last as usize, MAX_COLUMNS - 1);
    }
}
