use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::foundation::error::{PawtrailError, PawtrailResult};

/// Metadata for a stored object.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ObjectMeta {
    /// Virtual path of the object, e.g. `walks/{id}/photo.jpg`.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME content type.
    pub content_type: String,
    /// Timestamp when the object was stored.
    pub created_at: DateTime<Utc>,
}

/// Object storage collaborator: upload bytes, read them back, and mint
/// public URLs. Hosted buckets plug in behind this trait; the bundled
/// backends serve public URLs from the same-origin `/media` route.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store an object at `path`, replacing any existing object.
    async fn put(&self, path: &str, data: &[u8], content_type: &str)
    -> PawtrailResult<ObjectMeta>;

    /// Retrieve an object and its metadata; `None` when absent.
    async fn get(&self, path: &str) -> PawtrailResult<Option<(Vec<u8>, ObjectMeta)>>;

    /// Public URL the object is reachable at.
    fn public_url(&self, path: &str) -> String;
}

/// Validate and normalize an object path: relative, no `..`, non-empty.
pub fn normalize_object_path(path: &str) -> PawtrailResult<String> {
    let s = path.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PawtrailError::validation("object paths must be relative"));
    }

    let mut parts = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PawtrailError::validation(
                "object paths must not contain '..'",
            ));
        }
        parts.push(part);
    }

    if parts.is_empty() {
        return Err(PawtrailError::validation("object path must be non-empty"));
    }
    Ok(parts.join("/"))
}

#[derive(Clone)]
struct MemoryObject {
    data: Arc<Vec<u8>>,
    meta: ObjectMeta,
}

/// In-memory object store for tests and development.
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    base_url: String,
    objects: Arc<DashMap<String, MemoryObject>>,
}

impl MemoryObjectStore {
    /// Create a store minting URLs under `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> PawtrailResult<ObjectMeta> {
        let norm = normalize_object_path(path)?;
        let meta = ObjectMeta {
            path: norm.clone(),
            size: data.len() as u64,
            content_type: content_type.to_string(),
            created_at: Utc::now(),
        };
        self.objects.insert(
            norm,
            MemoryObject {
                data: Arc::new(data.to_vec()),
                meta: meta.clone(),
            },
        );
        Ok(meta)
    }

    async fn get(&self, path: &str) -> PawtrailResult<Option<(Vec<u8>, ObjectMeta)>> {
        let norm = normalize_object_path(path)?;
        Ok(self
            .objects
            .get(&norm)
            .map(|o| (o.data.as_ref().clone(), o.meta.clone())))
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/media/{path}", self.base_url)
    }
}

/// Filesystem-backed object store rooted at a data directory.
///
/// Content types are re-inferred from the file extension on read.
#[derive(Clone, Debug)]
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    /// Create a store rooted at `root`, minting URLs under `base_url`.
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> PawtrailResult<ObjectMeta> {
        let norm = normalize_object_path(path)?;
        let abs = self.root.join(&norm);
        if let Some(parent) = abs.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create object dir '{}'", parent.display()))
                .map_err(PawtrailError::from)?;
        }
        tokio::fs::write(&abs, data)
            .await
            .with_context(|| format!("write object '{}'", abs.display()))
            .map_err(PawtrailError::from)?;

        Ok(ObjectMeta {
            path: norm,
            size: data.len() as u64,
            content_type: content_type.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn get(&self, path: &str) -> PawtrailResult<Option<(Vec<u8>, ObjectMeta)>> {
        let norm = normalize_object_path(path)?;
        let abs = self.root.join(&norm);

        let data = match tokio::fs::read(&abs).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PawtrailError::storage(format!(
                    "read object '{}': {e}",
                    abs.display()
                )));
            }
        };

        let content_type = mime_guess::from_path(&abs)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let created_at = tokio::fs::metadata(&abs)
            .await
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(Utc::now);

        let size = data.len() as u64;
        Ok(Some((
            data,
            ObjectMeta {
                path: norm,
                size,
                content_type,
                created_at,
            },
        )))
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/media/{path}", self.base_url)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/objects.rs"]
mod tests;
