//! 수강 신청 데이터 액세스 계층
//!
//! [`EnrollmentStore`] 트레이트가 서비스와 저장소 사이의 경계입니다.
//! 운영 구현은 [`MongoEnrollmentRepository`](enrollment_repo::MongoEnrollmentRepository)이며,
//! 테스트에서는 `mockall`이 생성하는 `MockEnrollmentStore`를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let repo = MongoEnrollmentRepository::new(database.clone(), redis.clone());
//! repo.create_indexes().await?;
//!
//! let store: Arc<dyn EnrollmentStore> = Arc::new(repo);
//! let paid = store.find_paid(&user_id, &course_id).await?;
//! ```

pub mod enrollment_repo;
pub mod pipeline;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::dto::enrollments::{AdminEnrollmentItem, BuyerEnrollmentItem};
use crate::domain::dto::pagination::{Page, PageRequest};
use crate::domain::entities::{Enrollment, EnrollmentStatus};
use crate::domain::models::enrollment::{AdminListFilter, BuyerListFilter};

pub use enrollment_repo::MongoEnrollmentRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// 구매자와 강의 쌍의 `paid` 레코드
    async fn find_paid(&self, user_id: &ObjectId, course_id: &ObjectId) -> AppResult<Option<Enrollment>>;

    /// 새 레코드를 저장하고 ID가 채워진 레코드를 반환합니다.
    async fn insert(&self, enrollment: Enrollment) -> AppResult<Enrollment>;

    async fn find_by_payment_id(&self, payment_id: &str) -> AppResult<Option<Enrollment>>;

    /// 저장된 상태가 `from`일 때만 `to`로 바꿉니다.
    ///
    /// 갱신에 성공하면 갱신 후 레코드를, 다른 요청이 먼저 바꿨거나 레코드가 없으면 `None`을 반환합니다.
    async fn transition_status(
        &self,
        payment_id: &str,
        from: EnrollmentStatus,
        to: EnrollmentStatus,
    ) -> AppResult<Option<Enrollment>>;

    async fn list_for_buyer(
        &self,
        user_id: &ObjectId,
        filter: &BuyerListFilter,
        page: &PageRequest,
    ) -> AppResult<Page<BuyerEnrollmentItem>>;

    async fn list_all(&self, filter: &AdminListFilter, page: &PageRequest) -> AppResult<Page<AdminEnrollmentItem>>;
}
