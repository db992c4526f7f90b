use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::ReviewFields;
use super::repository::ReviewRepository;
use crate::errors::ServiceError;

/// Review business service independent of the web framework.
///
/// Enforces field presence rules and not-found translation; row access goes
/// through the repository so any SQL driver (or an in-memory fake) can back it.
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    /// Listing limit applied when the caller does not supply one.
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self { Self { repo } }

    /// Total number of persisted reviews.
    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }

    /// Up to `limit` reviews after skipping `skip`, in stable id order.
    /// Empty when `skip` exceeds the row count.
    pub async fn paginate(
        &self,
        limit: Option<u64>,
        skip: u64,
    ) -> Result<Vec<models::review::Model>, ServiceError> {
        self.repo.list(limit.unwrap_or(Self::DEFAULT_LIMIT), skip).await
    }

    /// Lookup that tolerates absence.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<models::review::Model>, ServiceError> {
        self.repo.find(id).await
    }

    /// Lookup that requires presence; `NotFound` otherwise.
    pub async fn get_by_id(&self, id: i32) -> Result<models::review::Model, ServiceError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("review"))
    }

    /// Create a review; both fields are required and must be non-empty.
    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: ReviewFields) -> Result<i32, ServiceError> {
        let (Some(name), Some(description)) = (fields.name(), fields.description()) else {
            return Err(ServiceError::Validation("name and description are required".into()));
        };
        models::review::validate_name(name)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        models::review::validate_description(description)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let id = self.repo.insert(name, description).await?;
        info!(id, "review_created");
        Ok(id)
    }

    /// Update a review; at least one non-empty field is required. The field
    /// rule is checked before existence, so an empty payload fails with
    /// `Validation` regardless of `id`.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: i32, fields: ReviewFields) -> Result<bool, ServiceError> {
        let name = fields.name();
        let description = fields.description();
        if name.is_none() && description.is_none() {
            return Err(ServiceError::Validation("a name or description is required".into()));
        }
        if let Some(n) = name {
            models::review::validate_name(n).map_err(|e| ServiceError::Validation(e.to_string()))?;
        }

        self.get_by_id(id).await?;

        let updated = self.repo.update_partial(id, name, description).await?;
        info!(id, updated, "review_updated");
        Ok(updated)
    }

    /// Delete a review; `NotFound` when no row with `id` exists.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        self.get_by_id(id).await?;

        let deleted = self.repo.delete(id).await?;
        info!(id, deleted, "review_deleted");
        Ok(deleted)
    }
}
