use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glance_core::content::{DocumentSource, WordStore};
use log::info;

const UNSUPPORTED_EXTENSIONS: &[&str] = &["pdf", "epub", "docx"];

#[derive(Debug, thiserror::Error)]
pub(super) enum DocumentError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported document format: .{0}")]
    Unsupported(String),
}

/// Plain-text document on disk.
pub(super) struct FileDocument {
    path: PathBuf,
    key: String,
}

impl FileDocument {
    pub(super) fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let key = fs::canonicalize(&path)
            .unwrap_or_else(|_| path.clone())
            .display()
            .to_string();
        Self { path, key }
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileDocument {
    type Error = DocumentError;

    fn key(&self) -> &str {
        &self.key
    }

    fn load(&mut self) -> Result<WordStore, Self::Error> {
        if let Some(extension) = self.path.extension().and_then(|ext| ext.to_str()) {
            let extension = extension.to_ascii_lowercase();
            if UNSUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(DocumentError::Unsupported(extension));
            }
        }

        let bytes = fs::read(&self.path).map_err(|source| DocumentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let store = WordStore::from_text(&text);

        info!(
            "document: loaded path={} bytes={} words={}",
            self.path.display(),
            bytes.len(),
            store.len()
        );
        Ok(store)
    }
}
