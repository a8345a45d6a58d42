pub mod header;
pub mod pagination;
pub mod toast;
pub mod ui;
