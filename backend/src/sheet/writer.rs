use super::layout::SheetLayout;
use crate::catalog::SHEET_NAME;
use crate::error::GenerationError;
use rust_xlsxwriter::{DataValidation, Workbook};

/// Number of rows in an xlsx worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Zero-based index of the first row below the header.
const FIRST_DATA_ROW: u32 = 1;

/// Renders `layout` as a single-sheet workbook held entirely in memory.
///
/// Row 1 holds the headers. Every constrained column gets a list validation
/// covering all remaining rows of the sheet.
pub fn write_workbook(layout: &SheetLayout) -> Result<Vec<u8>, GenerationError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, column) in layout.indexed_columns() {
        worksheet.write_string(0, col, &column.header)?;
    }

    for (col, list) in layout.dropdowns() {
        let validation = DataValidation::new().allow_list_strings(list.entries())?;
        worksheet.add_data_validation(FIRST_DATA_ROW, col, MAX_ROWS - 1, col, &validation)?;
    }

    Ok(workbook.save_to_buffer()?)
}
