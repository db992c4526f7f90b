use async_trait::async_trait;

use crate::errors::ServiceError;

/// Repository abstraction for review persistence.
///
/// A plain data-access interface: no validation or not-found translation
/// lives here, only row operations. Implementable against any SQL driver.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn count(&self) -> Result<u64, ServiceError>;
    /// Up to `limit` rows after skipping `skip`, in stable id order.
    async fn list(&self, limit: u64, skip: u64) -> Result<Vec<models::review::Model>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<models::review::Model>, ServiceError>;
    /// Insert a row and return its assigned id.
    async fn insert(&self, name: &str, description: &str) -> Result<i32, ServiceError>;
    /// Apply only the supplied fields; `Ok(false)` when the row is gone.
    async fn update_partial(
        &self,
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockReviewRepository {
        rows: Mutex<BTreeMap<i32, models::review::Model>>, // key: id, iteration = id order
        next_id: AtomicI32,
    }

    #[async_trait]
    impl ReviewRepository for MockReviewRepository {
        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }

        async fn list(
            &self,
            limit: u64,
            skip: u64,
        ) -> Result<Vec<models::review::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .values()
                .skip(skip as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn find(&self, id: i32) -> Result<Option<models::review::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, name: &str, description: &str) -> Result<i32, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let now = Utc::now().into();
            let row = models::review::Model {
                id,
                name: name.to_string(),
                description: description.to_string(),
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().insert(id, row);
            Ok(id)
        }

        async fn update_partial(
            &self,
            id: i32,
            name: Option<&str>,
            description: Option<&str>,
        ) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.get_mut(&id) else { return Ok(false) };
            if let Some(n) = name {
                row.name = n.to_string();
            }
            if let Some(d) = description {
                row.description = d.to_string();
            }
            row.updated_at = Utc::now().into();
            Ok(true)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
