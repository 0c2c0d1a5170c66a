pub mod bookmark_render;
mod bookmark_storage;
mod bookmark_store;

pub use bookmark_storage::{
    bookmarks_path, corrupt_backup_path, load_bookmarks_from_path, parse_bookmarks_json,
    save_bookmarks_to_path,
};
pub use bookmark_store::BookmarkStore;
