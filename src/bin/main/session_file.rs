use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glance_core::session::{SessionError, SessionState, SessionStore, checksum32};
use log::{debug, warn};

const SESSION_EXTENSION: &str = "gls";

#[derive(Debug, thiserror::Error)]
pub(super) enum SessionFileError {
    #[error("session file i/o failed at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("session record at {} is unreadable: {:?}", .path.display(), .kind)]
    Codec { path: PathBuf, kind: SessionError },
}

/// One record file per document, named by a hash of the document key.
pub(super) struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub(super) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(super) fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, document_key: &str) -> PathBuf {
        let hash = checksum32(document_key.as_bytes());
        self.dir.join(format!("{hash:08x}.{SESSION_EXTENSION}"))
    }
}

impl SessionStore for FileSessionStore {
    type Error = SessionFileError;

    fn load(&mut self, document_key: &str) -> Result<Option<SessionState>, Self::Error> {
        let path = self.path_for(document_key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("session: none saved key={}", document_key);
                return Ok(None);
            }
            Err(source) => return Err(SessionFileError::Io { path, source }),
        };

        match SessionState::decode(&bytes) {
            Ok(state) => Ok(state),
            Err(kind) => {
                warn!("session: bad record path={} err={:?}", path.display(), kind);
                Err(SessionFileError::Codec { path, kind })
            }
        }
    }

    fn save(&mut self, document_key: &str, state: &SessionState) -> Result<(), Self::Error> {
        let path = self.path_for(document_key);
        let io_error = |source| SessionFileError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_error)?;
        let staging = path.with_extension("tmp");
        fs::write(&staging, state.encode()).map_err(io_error)?;
        fs::rename(&staging, &path).map_err(io_error)?;

        debug!(
            "session: saved key={} path={} line={}",
            document_key,
            path.display(),
            state.current_line
        );
        Ok(())
    }
}
