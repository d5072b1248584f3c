use std::path::PathBuf;

use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Persists the content and returns the stored location
    async fn store(&self, name: &str, content: &[u8]) -> Result<String, std::io::Error>;

    /// Deletes a location previously returned by [`DocumentStorage::store`]
    async fn remove(&self, location: &str) -> Result<(), std::io::Error>;
}

pub struct FilesystemDocumentStorage {
    root: PathBuf,
}

impl FilesystemDocumentStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentStorage for FilesystemDocumentStorage {
    async fn store(&self, name: &str, content: &[u8]) -> Result<String, std::io::Error> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(name);
        tokio::fs::write(&path, content).await?;

        tracing::debug!(path = %path.display(), size = content.len(), "Document stored");
        Ok(path.to_string_lossy().into_owned())
    }

    async fn remove(&self, location: &str) -> Result<(), std::io::Error> {
        tokio::fs::remove_file(location).await?;

        tracing::debug!(path = location, "Document removed");
        Ok(())
    }
}
