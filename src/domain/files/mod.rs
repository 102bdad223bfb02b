pub mod entity;
pub mod invariants;

pub use entity::{FileRow, FileRowSet, SelectedFile};
pub use invariants::{is_pdf, validate_selection, MAX_FILE_SIZE};
