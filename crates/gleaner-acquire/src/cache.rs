use std::fs::File;
use std::future::Future;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AcquireError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Return the cached file whenever it exists
    #[default]
    UseExisting,
    /// Always rebuild and overwrite the cached file
    Refresh,
}

/// Whole-file JSON array cache. There is no invalidation: if the file exists it
/// is the answer, whatever inputs produced it.
#[derive(Debug, Clone)]
pub struct JsonCache {
    path: PathBuf,
}

impl JsonCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, AcquireError> {
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn store<T: Serialize>(&self, items: &[T]) -> Result<(), AcquireError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, items)?;
        writer.flush()?;
        Ok(())
    }

    /// Load the cached array, or run `build` and persist its result.
    /// Nothing is written when `build` fails.
    pub async fn get_or_build<T, F, Fut>(
        &self,
        policy: CachePolicy,
        build: F,
    ) -> Result<Vec<T>, AcquireError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, AcquireError>>,
    {
        if policy == CachePolicy::UseExisting && self.exists() {
            let items = self.load()?;
            tracing::info!("Loaded {} cached items from {}", items.len(), self.path.display());
            return Ok(items);
        }

        let items = build().await?;
        self.store(&items)?;
        tracing::info!("Cached {} items to {}", items.len(), self.path.display());
        Ok(items)
    }
}
