//! Resolution of bundled assets by logical name.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{0}` not found")]
    NotFound(String),
    #[error("asset name `{0}` is not a relative path inside the asset root")]
    InvalidName(String),
    #[error("failed to read asset `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

pub trait AssetResolver {
    fn resolve(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

/// Assets stored below a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Looks for an `assets` directory next to the executable, then in the
    /// working directory.
    pub fn locate() -> Self {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .filter(|dir| dir.is_dir());
        let root = beside_exe.unwrap_or_else(|| PathBuf::from("assets"));
        debug!(root = %root.display(), "asset root selected");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(name);
        let is_plain = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.path_for(name)?;
        fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(name.to_string()),
            _ => AssetError::Io {
                name: name.to_string(),
                source,
            },
        })
    }
}

/// In-memory assets keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }
}

impl AssetResolver for MemoryAssets {
    fn resolve(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
