use crate::domain::ports::Release;
use crate::utils::error::{KitError, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Read,
    Write,
    Append,
}

/// An open file that is closed exactly once, on [`Release::release`] or drop.
#[derive(Debug)]
pub struct ScopedFile {
    path: PathBuf,
    mode: FileMode,
    handle: Option<File>,
}

impl ScopedFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        match mode {
            FileMode::Read => options.read(true),
            FileMode::Write => options.write(true).create(true).truncate(true),
            FileMode::Append => options.append(true).create(true),
        };

        let handle = options.open(&path)?;
        tracing::debug!("Opened {} ({:?})", path.display(), mode);

        Ok(Self {
            path,
            mode,
            handle: Some(handle),
        })
    }

    pub fn write_str(&mut self, text: &str) -> Result<()> {
        let handle = self.handle_mut("write_str")?;
        handle.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn read_to_string(&mut self) -> Result<String> {
        let handle = self.handle_mut("read_to_string")?;
        let mut content = String::new();
        handle.read_to_string(&mut content)?;
        Ok(content)
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    fn handle_mut(&mut self, operation: &str) -> Result<&mut File> {
        match self.handle.as_mut() {
            Some(handle) => Ok(handle),
            None => {
                tracing::warn!("{} on closed file {}", operation, self.path.display());
                Err(KitError::invalid_state(operation))
            }
        }
    }
}

impl Release for ScopedFile {
    fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(mut handle) => {
                if let Err(e) = handle.flush() {
                    tracing::error!("Flushing {} failed: {}", self.path.display(), e);
                }
                tracing::debug!("Closed {}", self.path.display());
                true
            }
            None => false,
        }
    }

    fn is_released(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        self.release();
    }
}
