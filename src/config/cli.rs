use crate::core::Storage;
use crate::utils::error::{IndexError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads inputs from disk and writes the document to stdout, or to `output`
/// when one is set.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    output: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    pub fn stdout() -> Self {
        Self::default()
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| IndexError::FileAccessError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_document(&self, document: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, document)?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(document.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}
