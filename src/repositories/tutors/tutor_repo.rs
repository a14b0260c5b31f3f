use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId};
use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, Database};
use crate::domain::entities::Tutor;
use super::TutorStore;

pub struct MongoTutorRepository {
    db: Arc<Database>,
}

impl MongoTutorRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl TutorStore for MongoTutorRepository {
    async fn find_tutor(&self, tutor_id: &ObjectId) -> AppResult<Option<Tutor>> {
        self.db
            .collection::<Tutor>(collections::TUTORS)
            .find_one(doc! { "_id": *tutor_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
