use super::entity::SelectedFile;
use crate::domain::{DomainError, DomainResult};
use regex::Regex;
use std::sync::OnceLock;

/// Upload size cap per file: 25 MiB
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

fn pdf_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.pdf$").expect("valid regex"))
}

/// A file counts as a PDF when its MIME type is `application/pdf` or its
/// name carries a `.pdf` suffix in any case
pub fn is_pdf(file: &SelectedFile) -> bool {
    file.mime_type == PDF_MIME || pdf_suffix().is_match(&file.name)
}

/// Validates a file selection before submission
///
/// Run synchronously ahead of any request: the selection must be non-empty,
/// every file must pass the PDF predicate, and none may exceed the size cap.
pub fn validate_selection(files: &[SelectedFile]) -> DomainResult<()> {
    if files.is_empty() {
        return Err(DomainError::NoFilesSelected);
    }

    for file in files {
        if !is_pdf(file) {
            return Err(DomainError::NotAPdf(file.name.clone()));
        }
        if file.size > MAX_FILE_SIZE {
            return Err(DomainError::FileTooLarge(file.name.clone()));
        }
    }

    Ok(())
}
