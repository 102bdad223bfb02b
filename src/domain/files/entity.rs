use serde::{Deserialize, Serialize};

/// A user-chosen file handle, captured at submission time
///
/// Lifecycle: created per form submission, discarded after the request
/// is sent. The bytes travel in the multipart body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedFile {
    /// Original filename as presented by the user
    pub name: String,

    /// MIME type reported for the file (may be empty)
    pub mime_type: String,

    /// Size in bytes
    pub size: u64,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes_len = bytes.len() as u64;
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes_len,
            bytes,
        }
    }
}

/// One file-input row. A row exists before a file is chosen for it.
#[derive(Debug, Clone)]
pub struct FileRow {
    /// Stable identifier, survives removal of other rows
    pub id: u64,

    /// The file chosen for this row, if any
    pub selection: Option<SelectedFile>,
}

/// Ordered, variable-length list of file-input rows
///
/// Supports append and removal only; rows are never reordered. Collecting
/// yields the selections of populated rows, in row order.
#[derive(Debug, Default)]
pub struct FileRowSet {
    rows: Vec<FileRow>,
    next_id: u64,
}

impl FileRowSet {
    /// Start with a single empty row, matching the initial page state
    pub fn new() -> Self {
        let mut set = Self {
            rows: Vec::new(),
            next_id: 0,
        };
        set.add_row();
        set
    }

    /// Append a new empty row; returns its id
    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(FileRow {
            id,
            selection: None,
        });
        id
    }

    /// Delete one row by id. Unknown ids are ignored.
    pub fn remove_row(&mut self, id: u64) {
        self.rows.retain(|row| row.id != id);
    }

    /// Attach a file to a row. Returns false if the row does not exist.
    pub fn set_file(&mut self, id: u64, file: SelectedFile) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.selection = Some(file);
                true
            }
            None => false,
        }
    }

    /// Clear a row's selection without removing the row
    pub fn clear_file(&mut self, id: u64) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.selection = None;
        }
    }

    /// Files of rows that have a selection, in row order
    pub fn collect_files(&self) -> Vec<SelectedFile> {
        self.rows
            .iter()
            .filter_map(|row| row.selection.clone())
            .collect()
    }

    pub fn rows(&self) -> &[FileRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
