pub mod tutor_repo;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::entities::Tutor;

pub use tutor_repo::MongoTutorRepository;

/// 강사 계정 조회 (읽기 전용)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TutorStore: Send + Sync {
    async fn find_tutor(&self, tutor_id: &ObjectId) -> AppResult<Option<Tutor>>;
}
