// jobsift Infrastructure - Filesystem Adapter
// Implements: CursorStore

mod cursor_file;

pub use cursor_file::FileCursorStore;
