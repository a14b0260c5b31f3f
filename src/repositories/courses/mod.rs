//! 강의 조회 계층
//!
//! 강의 문서는 이 서비스에서 읽기 전용입니다.

pub mod course_repo;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::entities::Course;

pub use course_repo::MongoCourseRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_course(&self, course_id: &ObjectId) -> AppResult<Option<Course>>;
}
