pub mod table_checkbox;

pub use table_checkbox::{GroupCheckboxCell, RowCheckboxCell};
