use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::walk::model::{MediaReference, Walk, WalkId};

/// Document-store collaborator for walk records.
///
/// Walks are created once, mutated only to attach media and recap references,
/// and never deleted. Listing is ordered by creation time descending. Hosted
/// document databases plug in behind this trait.
#[async_trait]
pub trait WalkStore: Send + Sync + 'static {
    /// Insert a new walk record.
    async fn insert(&self, walk: &Walk) -> PawtrailResult<()>;

    /// Fetch a walk by id; `None` when absent.
    async fn get(&self, id: WalkId) -> PawtrailResult<Option<Walk>>;

    /// List up to `limit` walks, newest first.
    async fn list(&self, limit: usize) -> PawtrailResult<Vec<Walk>>;

    /// Append a media reference to an existing walk.
    async fn attach_media(&self, id: WalkId, media: MediaReference) -> PawtrailResult<Walk>;

    /// Record the public URL of a stored recap image.
    async fn set_recap_url(&self, id: WalkId, url: String) -> PawtrailResult<Walk>;
}

/// In-memory walk store for tests and development.
#[derive(Clone, Default)]
pub struct MemoryWalkStore {
    walks: Arc<DashMap<WalkId, Walk>>,
}

impl MemoryWalkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalkStore for MemoryWalkStore {
    async fn insert(&self, walk: &Walk) -> PawtrailResult<()> {
        self.walks.insert(walk.id, walk.clone());
        Ok(())
    }

    async fn get(&self, id: WalkId) -> PawtrailResult<Option<Walk>> {
        Ok(self.walks.get(&id).map(|w| w.value().clone()))
    }

    async fn list(&self, limit: usize) -> PawtrailResult<Vec<Walk>> {
        let mut walks: Vec<Walk> = self.walks.iter().map(|w| w.value().clone()).collect();
        walks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        walks.truncate(limit);
        Ok(walks)
    }

    async fn attach_media(&self, id: WalkId, media: MediaReference) -> PawtrailResult<Walk> {
        let mut entry = self
            .walks
            .get_mut(&id)
            .ok_or_else(|| PawtrailError::not_found(format!("walk {id}")))?;
        entry.media.push(media);
        Ok(entry.value().clone())
    }

    async fn set_recap_url(&self, id: WalkId, url: String) -> PawtrailResult<Walk> {
        let mut entry = self
            .walks
            .get_mut(&id)
            .ok_or_else(|| PawtrailError::not_found(format!("walk {id}")))?;
        entry.recap_url = Some(url);
        Ok(entry.value().clone())
    }
}

/// Filesystem-backed walk store: one JSON document per walk under `root`.
#[derive(Clone, Debug)]
pub struct FsWalkStore {
    root: PathBuf,
}

impl FsWalkStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn doc_path(&self, id: WalkId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    async fn write_doc(&self, walk: &Walk) -> PawtrailResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create walk dir '{}'", self.root.display()))
            .map_err(PawtrailError::from)?;
        let json = serde_json::to_vec_pretty(walk)
            .map_err(|e| PawtrailError::serde(format!("serialize walk {}: {e}", walk.id)))?;
        let path = self.doc_path(walk.id);
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("write walk doc '{}'", path.display()))
            .map_err(PawtrailError::from)?;
        Ok(())
    }

    async fn read_doc(&self, id: WalkId) -> PawtrailResult<Option<Walk>> {
        let path = self.doc_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PawtrailError::storage(format!(
                    "read walk doc '{}': {e}",
                    path.display()
                )));
            }
        };
        let walk = serde_json::from_slice(&bytes)
            .map_err(|e| PawtrailError::serde(format!("parse walk doc '{}': {e}", path.display())))?;
        Ok(Some(walk))
    }
}

#[async_trait]
impl WalkStore for FsWalkStore {
    async fn insert(&self, walk: &Walk) -> PawtrailResult<()> {
        self.write_doc(walk).await
    }

    async fn get(&self, id: WalkId) -> PawtrailResult<Option<Walk>> {
        self.read_doc(id).await
    }

    async fn list(&self, limit: usize) -> PawtrailResult<Vec<Walk>> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PawtrailError::storage(format!(
                    "list walk dir '{}': {e}",
                    self.root.display()
                )));
            }
        };

        let mut walks = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| PawtrailError::storage(format!("list walk dir: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match serde_json::from_slice::<Walk>(&bytes) {
                Ok(walk) => walks.push(walk),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable walk doc");
                }
            }
        }

        walks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        walks.truncate(limit);
        Ok(walks)
    }

    async fn attach_media(&self, id: WalkId, media: MediaReference) -> PawtrailResult<Walk> {
        let mut walk = self
            .read_doc(id)
            .await?
            .ok_or_else(|| PawtrailError::not_found(format!("walk {id}")))?;
        walk.media.push(media);
        self.write_doc(&walk).await?;
        Ok(walk)
    }

    async fn set_recap_url(&self, id: WalkId, url: String) -> PawtrailResult<Walk> {
        let mut walk = self
            .read_doc(id)
            .await?
            .ok_or_else(|| PawtrailError::not_found(format!("walk {id}")))?;
        walk.recap_url = Some(url);
        self.write_doc(&walk).await?;
        Ok(walk)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/walks.rs"]
mod tests;
