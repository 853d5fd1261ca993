//! File delivery for exported documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;

/// Hands a finished document to the user.
pub trait FileDelivery: Send + Sync {
    fn deliver(&self, content: &str, filename: &str) -> anyhow::Result<()>;
}

/// Writes delivered files into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, content: &str, filename: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "export written");
        Ok(())
    }
}

/// A delivered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub content: String,
    pub filename: String,
}

/// Keeps deliveries in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDelivery {
    delivered: Arc<Mutex<Vec<Delivered>>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> anyhow::Result<Vec<Delivered>> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .map_err(|_| anyhow::anyhow!("delivery log poisoned"))
    }
}

impl FileDelivery for MemoryDelivery {
    fn deliver(&self, content: &str, filename: &str) -> anyhow::Result<()> {
        let mut delivered = self
            .delivered
            .lock()
            .map_err(|_| anyhow::anyhow!("delivery log poisoned"))?;
        delivered.push(Delivered {
            content: content.to_string(),
            filename: filename.to_string(),
        });
        Ok(())
    }
}
