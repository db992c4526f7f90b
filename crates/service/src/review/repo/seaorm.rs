use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};

use crate::errors::ServiceError;
use crate::review::repository::ReviewRepository;
use models::review::{self, Entity as ReviewEntity};

/// SeaORM-backed repository implementation.
pub struct SeaOrmReviewRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn count(&self) -> Result<u64, ServiceError> {
        ReviewEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list(&self, limit: u64, skip: u64) -> Result<Vec<review::Model>, ServiceError> {
        ReviewEntity::find()
            .order_by_asc(review::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find(&self, id: i32) -> Result<Option<review::Model>, ServiceError> {
        ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, name: &str, description: &str) -> Result<i32, ServiceError> {
        let created = review::create(&self.db, name, description).await?;
        Ok(created.id)
    }

    async fn update_partial(
        &self,
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, ServiceError> {
        let current = ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(false) };

        let mut am: review::ActiveModel = existing.into();
        if let Some(n) = name {
            am.name = Set(n.to_string());
        }
        if let Some(d) = description {
            am.description = Set(d.to_string());
        }
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = ReviewEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
