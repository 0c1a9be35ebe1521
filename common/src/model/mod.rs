pub mod catalog;
pub mod column;
