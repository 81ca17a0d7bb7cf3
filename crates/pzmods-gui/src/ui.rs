pub mod header;
pub mod panes;
