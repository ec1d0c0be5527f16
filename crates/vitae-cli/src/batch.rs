//! Batch processing of CV text files.

use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use vitae_domain::EducationRecord;
use vitae_extractor::{review_record, Extractor};

/// The outcome of processing one document.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    /// Extracted record; for failures, an empty record carrying an `ERROR:` note
    pub record: EducationRecord,
    /// Whether the document could not be read
    pub failed: bool,
}

fn is_text_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Expand paths into the list of text files to process.
///
/// Explicit files are kept in argument order; each directory contributes its
/// `.txt` files in alphabetical order.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            collect_dir(path, recursive, &mut found)?;
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            if !is_text_file(path) {
                return Err(CliError::InvalidInput(format!(
                    "{} is not a .txt file",
                    path.display()
                )));
            }
            files.push(path.clone());
        } else {
            return Err(CliError::InvalidInput(format!("{} does not exist", path.display())));
        }
    }

    Ok(files)
}

fn collect_dir(dir: &Path, recursive: bool, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect_dir(&path, recursive, found)?;
            }
        } else if is_text_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Label a document by its file name.
pub fn document_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process one file; read failures become an `ERROR:` note instead of aborting.
pub fn process_file(extractor: &Extractor, path: &Path) -> DocumentResult {
    let label = document_label(path);

    match fs::read_to_string(path) {
        Ok(text) => {
            let mut record = extractor.parse(&text, &label);
            for warning in review_record(&record) {
                debug!("Document '{}': {}", label, warning);
                record.add_note(format!("VALIDATION: {}", warning));
            }
            DocumentResult { record, failed: false }
        }
        Err(e) => {
            warn!("Could not read '{}': {}", path.display(), e);
            let mut record = EducationRecord::new(label);
            record.add_note(format!("ERROR: {}", e));
            DocumentResult { record, failed: true }
        }
    }
}

/// Process every file in order.
pub fn process_batch(extractor: &Extractor, files: &[PathBuf]) -> Vec<DocumentResult> {
    files.iter().map(|path| process_file(extractor, path)).collect()
}
