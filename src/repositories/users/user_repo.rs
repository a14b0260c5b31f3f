use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId};
use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, Database};
use crate::domain::entities::User;
use super::UserStore;

/// `users` 컬렉션 읽기 전용 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl UserStore for MongoUserRepository {
    async fn find_user(&self, user_id: &ObjectId) -> AppResult<Option<User>> {
        self.db
            .collection::<User>(collections::USERS)
            .find_one(doc! { "_id": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
