//! Turning a `GenerationRequest` into an `.xlsx` template.
//!
//! - `layout`: decides the header row and which columns get a dropdown.
//! - `dropdown`: validated option lists for list-type data validation.
//! - `writer`: serialises a layout into workbook bytes.

mod dropdown;
mod layout;
mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use layout::SheetLayout;
pub use writer::write_workbook;
