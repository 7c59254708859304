use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::Reservation;

/// In-process reservation table keyed by reservation id.
///
/// Cloning shares the same table. Callers that check and then mutate must do
/// both under one [`ReservationStore::write`] guard.
#[derive(Clone, Debug, Default)]
pub struct ReservationStore {
    inner: Arc<RwLock<HashMap<String, Reservation>>>,
}

impl ReservationStore {
    pub async fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Reservation>> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Reservation>> {
        self.inner.write().await
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
