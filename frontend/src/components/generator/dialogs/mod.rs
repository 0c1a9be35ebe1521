mod custom_column;

pub use custom_column::custom_column_dialog;
