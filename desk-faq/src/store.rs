use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FaqError, FaqResult};
use crate::model::{FaqCorpus, FaqRecord};
use crate::parser::parse_faq_text;

/// Load FAQ records from `path`. A missing file is an empty corpus.
pub fn load_faqs(path: impl AsRef<Path>) -> FaqResult<Vec<FaqRecord>> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "faq corpus not found, using empty corpus");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let text = String::from_utf8(bytes)
        .map_err(|_| FaqError::InvalidEncoding { path: path.to_path_buf() })?;

    let records = parse_faq_text(&text);
    debug!(path = %path.display(), record_count = records.len(), "loaded faq corpus");
    Ok(records)
}

pub fn load_corpus(path: impl AsRef<Path>) -> FaqResult<FaqCorpus> {
    load_faqs(path).map(FaqCorpus::new)
}

/// Replace the corpus file at `path` with uploaded `content`.
///
/// The new text is written to a sibling temp file and renamed into place, so a
/// concurrent reader sees either the old corpus or the new one. Returns the
/// number of records the new corpus parses into.
pub fn replace_corpus(path: impl AsRef<Path>, content: &[u8]) -> FaqResult<usize> {
    let path = path.as_ref();
    let text = std::str::from_utf8(content)
        .map_err(|_| FaqError::InvalidEncoding { path: path.to_path_buf() })?;
    if text.trim().is_empty() {
        return Err(FaqError::EmptyUpload);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_sibling(path);
    fs::write(&tmp, text)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    let record_count = parse_faq_text(text).len();
    info!(path = %path.display(), record_count, "faq corpus replaced");
    Ok(record_count)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{name}.upload"))
}
