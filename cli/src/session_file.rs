//! Session token persisted in a plain file between invocations.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::io;
use std::path::PathBuf;

use roster::{ApiError, TokenStore};

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        std::fs::write(&self.path, token).map_err(|e| storage_error(&self.path, &e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| storage_error(&self.path, &e))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&self.path, &e)),
        }
    }
}

fn storage_error(path: &std::path::Path, error: &io::Error) -> ApiError {
    ApiError::Storage(format!("{}: {error}", path.display()))
}
