pub mod entry_list;
pub mod popup;
