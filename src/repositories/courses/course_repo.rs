//! # 강의 리포지토리 구현
//!
//! 체크아웃 품목명과 알림 메일 본문에 쓰이는 강의 정보를 조회합니다.
//! 같은 강의가 반복해서 결제되므로 `course:{id}` 키로 10분간 캐싱합니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId};
use crate::caching::{redis::RedisClient, DEFAULT_TTL_SECONDS};
use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, Database};
use crate::domain::entities::Course;
use super::CourseStore;

pub struct MongoCourseRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoCourseRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn cache_key(course_id: &ObjectId) -> String {
        format!("course:{}", course_id.to_hex())
    }
}

#[async_trait::async_trait]
impl CourseStore for MongoCourseRepository {
    async fn find_course(&self, course_id: &ObjectId) -> AppResult<Option<Course>> {
        let cache_key = Self::cache_key(course_id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Course>(&cache_key).await {
            return Ok(Some(cached));
        }

        let course = self
            .db
            .collection::<Course>(collections::COURSES)
            .find_one(doc! { "_id": *course_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref course) = course {
            let _ = self.redis
                .set_with_expiry(&cache_key, course, DEFAULT_TTL_SECONDS)
                .await;
        }

        Ok(course)
    }
}
