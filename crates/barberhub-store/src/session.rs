//! # Session Flag
//!
//! Remembers whether the user has gone past the welcome screen.
//!
//! ## State Machine
//! ```text
//!            mark_entered()              clear_entered()
//!   unset ─────────────────► entered ─────────────────► unset
//!     ▲                                                   │
//!     └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Degraded Mode
//! Storage is injected as an `Option`. Without it every write is a no-op and
//! `has_entered` answers `false`. Storage failures are logged and treated
//! the same way, so the welcome screen is shown again rather than crashing.
//!
//! ## Backends
//! - [`MemoryStorage`] - process-local map for tests and ephemeral runs
//! - [`FileStorage`] - JSON string map in the platform data directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Mutex as TokioMutex;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Key the flag is stored under.
pub const SESSION_KEY: &str = "app.hasEntered";

const ENTERED: &str = "1";

// =============================================================================
// Storage Trait
// =============================================================================

/// Asynchronous string key-value storage.
#[allow(async_fn_in_trait)]
pub trait SecureStorage: Send + Sync {
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    async fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    async fn delete_item(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every operation fails.
    pub fn unavailable() -> Self {
        MemoryStorage {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Storage("memory storage disabled".to_string()));
        }
        Ok(())
    }
}

impl SecureStorage for MemoryStorage {
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.items.lock().get(key).cloned())
    }

    async fn delete_item(&self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.items.lock().remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// JSON map on disk: `{ "app.hasEntered": "1" }`.
///
/// A missing file reads as an empty map. Writes go through one lock per
/// handle so read-modify-write cycles do not interleave, and land in a
/// sibling `.tmp` file that is renamed over the target, so a torn write
/// never replaces the last good map.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Arc<TokioMutex<()>>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage {
            path: path.into(),
            write_lock: Arc::new(TokioMutex::new(())),
        }
    }

    /// `session.json` in the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("uk", "barberhub", "marketplace")
            .map(|dirs| dirs.data_dir().join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_map(&self) -> StoreResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(map)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        debug!(path = %self.path.display(), entries = map.len(), "storage file written");
        Ok(())
    }
}

impl SecureStorage for FileStorage {
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn delete_item(&self, key: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

// =============================================================================
// Backend Selection
// =============================================================================

/// Backend chosen by configuration.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    Memory(MemoryStorage),
    File(FileStorage),
}

impl SecureStorage for StorageBackend {
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            StorageBackend::Memory(s) => s.set_item(key, value).await,
            StorageBackend::File(s) => s.set_item(key, value).await,
        }
    }

    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            StorageBackend::Memory(s) => s.get_item(key).await,
            StorageBackend::File(s) => s.get_item(key).await,
        }
    }

    async fn delete_item(&self, key: &str) -> StoreResult<()> {
        match self {
            StorageBackend::Memory(s) => s.delete_item(key).await,
            StorageBackend::File(s) => s.delete_item(key).await,
        }
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Best-effort "has entered" flag over optional storage.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: Option<S>,
}

impl<S: SecureStorage> SessionStore<S> {
    pub fn new(storage: Option<S>) -> Self {
        SessionStore { storage }
    }

    /// Degraded store with no backing storage.
    pub fn without_storage() -> Self {
        SessionStore { storage: None }
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Records that the user has entered the app.
    pub async fn mark_entered(&self) {
        let Some(storage) = &self.storage else {
            debug!("no session storage; mark_entered skipped");
            return;
        };
        if let Err(err) = storage.set_item(SESSION_KEY, ENTERED).await {
            warn!(error = %err, "failed to persist session flag");
        }
    }

    /// Whether the flag is set. Any failure reads as `false`.
    pub async fn has_entered(&self) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };
        match storage.get_item(SESSION_KEY).await {
            Ok(value) => value.as_deref() == Some(ENTERED),
            Err(err) => {
                warn!(error = %err, "failed to read session flag");
                false
            }
        }
    }

    /// Forgets the flag, e.g. on sign-out.
    pub async fn clear_entered(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.delete_item(SESSION_KEY).await {
            warn!(error = %err, "failed to clear session flag");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flag_lifecycle_in_memory() {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(Some(storage.clone()));

        assert!(!session.has_entered().await);
        session.mark_entered().await;
        assert!(session.has_entered().await);
        assert_eq!(
            storage.get_item(SESSION_KEY).await.unwrap().as_deref(),
            Some("1")
        );

        session.clear_entered().await;
        assert!(!session.has_entered().await);
    }

    #[tokio::test]
    async fn test_without_storage_is_a_no_op() {
        let session = SessionStore::<MemoryStorage>::without_storage();
        assert!(!session.has_storage());
        session.mark_entered().await;
        assert!(!session.has_entered().await);
        session.clear_entered().await;
    }

    #[tokio::test]
    async fn test_failing_storage_reads_false() {
        let session = SessionStore::new(Some(MemoryStorage::unavailable()));
        session.mark_entered().await;
        assert!(!session.has_entered().await);
        session.clear_entered().await;
    }

    #[tokio::test]
    async fn test_unexpected_value_is_not_entered() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "yes").await.unwrap();
        let session = SessionStore::new(Some(storage));
        assert!(!session.has_entered().await);
    }

    #[tokio::test]
    async fn test_file_storage_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let first = SessionStore::new(Some(StorageBackend::File(FileStorage::new(&path))));
        assert!(!first.has_entered().await);
        first.mark_entered().await;

        let second = SessionStore::new(Some(FileStorage::new(&path)));
        assert!(second.has_entered().await);

        second.clear_entered().await;
        assert!(!first.has_entered().await);
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item(SESSION_KEY).await,
            Err(StoreError::Serialization(_))
        ));
        assert!(!SessionStore::new(Some(storage)).has_entered().await);
    }

    #[tokio::test]
    async fn test_file_writes_replace_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let storage = FileStorage::new(&path);

        storage.set_item(SESSION_KEY, ENTERED).await.unwrap();
        assert!(!dir.path().join("session.json.tmp").exists());

        // Leftover of a write torn before the rename.
        tokio::fs::write(dir.path().join("session.json.tmp"), b"{\"app.has")
            .await
            .unwrap();
        assert!(SessionStore::new(Some(storage.clone())).has_entered().await);

        storage.set_item("other", "x").await.unwrap();
        assert!(!dir.path().join("session.json.tmp").exists());
        assert_eq!(
            storage.get_item(SESSION_KEY).await.unwrap().as_deref(),
            Some(ENTERED)
        );
    }
}
