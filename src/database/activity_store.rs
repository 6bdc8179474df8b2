use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::Activity;

pub type ActivityMap = IndexMap<String, Activity>;

/// In-memory activity registry shared by all handlers.
///
/// Cloning is cheap; every clone points at the same map. Mutations go through
/// [`ActivityStore::update`], which holds the write lock for the whole
/// closure so a check-then-modify sequence is atomic per process.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn from_seed(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn with_default_seed() -> Self {
        Self::from_seed(seed::default_activities())
    }

    pub async fn snapshot(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    pub async fn insert(&self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        self.inner.write().await.insert(name.into(), activity)
    }

    /// Runs `f` against the named activity under the write lock.
    /// Returns `None` when no activity has that name.
    pub async fn update<T>(&self, name: &str, f: impl FnOnce(&mut Activity) -> T) -> Option<T> {
        let mut guard = self.inner.write().await;
        guard.get_mut(name).map(f)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
