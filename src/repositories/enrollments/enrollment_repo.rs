//! # 수강 신청 리포지토리 구현
//!
//! MongoDB `enrollments` 컬렉션을 주 저장소로 사용하고, 결제 완료 여부 조회만 Redis에 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `enrollment:paid:{user_id}:{course_id}`
//! - **TTL**: 600초
//! - `paid`는 종결 상태이므로 양성 결과만 캐싱하며 무효화가 필요 없습니다.
//!   미결제 결과는 캐싱하지 않아 결제 직후의 조회가 항상 DB로 갑니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 용도 |
//! |------|----|------|
//! | `payment_id_unique` | `paymentId` (unique) | 결제 확인 조회, 상태 CAS |
//! | `user_course_status` | `userId, courseId, status` | 중복 결제 확인, 구매자 목록 |
//! | `date_of_enrollment_desc` | `dateOfEnrollment` (desc) | 최신순 목록 |

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::de::DeserializeOwned;
use crate::caching::{redis::RedisClient, DEFAULT_TTL_SECONDS};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::{collections, Database};
use crate::domain::dto::enrollments::{AdminEnrollmentItem, BuyerEnrollmentItem};
use crate::domain::dto::pagination::{Page, PageRequest};
use crate::domain::entities::{Enrollment, EnrollmentStatus};
use crate::domain::models::enrollment::{AdminListFilter, BuyerListFilter};
use super::pipeline::{admin_enrollments_pipeline, buyer_enrollments_pipeline, FacetResult};
use super::EnrollmentStore;

pub struct MongoEnrollmentRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Enrollment> {
        self.db.collection::<Enrollment>(collections::ENROLLMENTS)
    }

    fn paid_cache_key(user_id: &ObjectId, course_id: &ObjectId) -> String {
        format!("enrollment:paid:{}:{}", user_id.to_hex(), course_id.to_hex())
    }

    async fn cache_paid(&self, enrollment: &Enrollment) {
        let key = Self::paid_cache_key(&enrollment.user_id, &enrollment.course_id);
        if let Err(e) = self.redis.set_with_expiry(&key, enrollment, DEFAULT_TTL_SECONDS).await {
            debug!("결제 완료 캐시 저장 실패 ({}): {}", key, e);
        }
    }

    /// 목록 파이프라인을 실행하고 `$facet` 결과 문서를 한 페이지로 변환합니다.
    async fn run_page_pipeline<T: DeserializeOwned>(&self, pipeline: Vec<Document>) -> AppResult<Page<T>> {
        let mut cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let first = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match first {
            Some(document) => {
                let result: FacetResult<T> = bson::from_document(document)
                    .context("목록 결과 변환 실패")?;
                Ok(result.into_page())
            }
            None => Ok(Page { items: Vec::new(), total_count: 0 }),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let payment_id_index = IndexModel::builder()
            .keys(doc! { "paymentId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("payment_id_unique".to_string())
                .build())
            .build();

        let user_course_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "courseId": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("user_course_status".to_string())
                .build())
            .build();

        let date_index = IndexModel::builder()
            .keys(doc! { "dateOfEnrollment": -1 })
            .options(IndexOptions::builder()
                .name("date_of_enrollment_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([payment_id_index, user_course_index, date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl EnrollmentStore for MongoEnrollmentRepository {
    async fn find_paid(&self, user_id: &ObjectId, course_id: &ObjectId) -> AppResult<Option<Enrollment>> {
        let cache_key = Self::paid_cache_key(user_id, course_id);

        if let Ok(Some(cached)) = self.redis.get::<Enrollment>(&cache_key).await {
            return Ok(Some(cached));
        }

        let enrollment = self
            .collection()
            .find_one(doc! {
                "userId": *user_id,
                "courseId": *course_id,
                "status": EnrollmentStatus::Paid.as_str(),
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref enrollment) = enrollment {
            self.cache_paid(enrollment).await;
        }

        Ok(enrollment)
    }

    async fn insert(&self, mut enrollment: Enrollment) -> AppResult<Enrollment> {
        let result = self
            .collection()
            .insert_one(&enrollment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 수강 신청 ID를 확인할 수 없습니다".to_string()))?;
        enrollment.id = Some(id);

        Ok(enrollment)
    }

    async fn find_by_payment_id(&self, payment_id: &str) -> AppResult<Option<Enrollment>> {
        self.collection()
            .find_one(doc! { "paymentId": payment_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn transition_status(
        &self,
        payment_id: &str,
        from: EnrollmentStatus,
        to: EnrollmentStatus,
    ) -> AppResult<Option<Enrollment>> {
        if !from.can_transition_to(to) {
            return Err(AppError::InternalError(format!(
                "허용되지 않은 상태 전이: {} → {}",
                from.as_str(),
                to.as_str()
            )));
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "paymentId": payment_id, "status": from.as_str() },
                doc! { "$set": { "status": to.as_str() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match updated {
            Some(ref enrollment) if enrollment.is_paid() => self.cache_paid(enrollment).await,
            Some(_) => {}
            None => warn!(
                "상태 전이 미적용 (paymentId={}, {} → {}): 이미 처리되었거나 레코드 없음",
                payment_id,
                from.as_str(),
                to.as_str()
            ),
        }

        Ok(updated)
    }

    async fn list_for_buyer(
        &self,
        user_id: &ObjectId,
        filter: &BuyerListFilter,
        page: &PageRequest,
    ) -> AppResult<Page<BuyerEnrollmentItem>> {
        self.run_page_pipeline(buyer_enrollments_pipeline(user_id, filter, page)).await
    }

    async fn list_all(&self, filter: &AdminListFilter, page: &PageRequest) -> AppResult<Page<AdminEnrollmentItem>> {
        self.run_page_pipeline(admin_enrollments_pipeline(filter, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_cache_key_format() {
        let user_id = ObjectId::parse_str("665f1b2c3d4e5f6a7b8c9d10").unwrap();
        let course_id = ObjectId::parse_str("665f1b2c3d4e5f6a7b8c9d11").unwrap();

        assert_eq!(
            MongoEnrollmentRepository::paid_cache_key(&user_id, &course_id),
            "enrollment:paid:665f1b2c3d4e5f6a7b8c9d10:665f1b2c3d4e5f6a7b8c9d11"
        );
    }
}
