//! Enrollment Entity Implementation
//!
//! 구매자가 강의를 결제하려는 시도와 그 결과를 기록하는 엔티티입니다.
//! 디스크에는 camelCase 필드명으로 저장됩니다 (`enrollments` 컬렉션).
//!
//! ## 상태 전이
//!
//! ```text
//! pending ──▶ paid
//!    │
//!    └──────▶ failed
//! ```
//!
//! `paid`와 `failed`는 종결 상태이며, 어떤 경로로도 `pending`으로 돌아가지 않습니다.
//! 레코드는 삭제되지 않고, 버려진 체크아웃 세션은 `pending`으로 남습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 수강 신청 결제 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Pending,
    Paid,
    Failed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Paid => "paid",
            EnrollmentStatus::Failed => "failed",
        }
    }

    /// 쿼리 파라미터 값에서 상태를 파싱합니다 (대소문자 무관).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Some(EnrollmentStatus::Pending),
            "paid" => Some(EnrollmentStatus::Paid),
            "failed" => Some(EnrollmentStatus::Failed),
            _ => None,
        }
    }

    /// 현재 상태에서 `next`로 전이할 수 있는지 확인
    pub fn can_transition_to(&self, next: EnrollmentStatus) -> bool {
        matches!(
            (self, next),
            (EnrollmentStatus::Pending, EnrollmentStatus::Paid)
                | (EnrollmentStatus::Pending, EnrollmentStatus::Failed)
        )
    }
}

/// 결제 수단. 현재는 Stripe 체크아웃만 지원합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Stripe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub tutor_id: ObjectId,
    pub course_id: ObjectId,
    pub category_id: ObjectId,
    pub price: f64,
    /// 결제 프로바이더의 체크아웃 세션 ID (유니크)
    pub payment_id: String,
    pub payment_method: PaymentMethod,
    pub status: EnrollmentStatus,
    pub date_of_enrollment: DateTime,
}

impl Enrollment {
    /// 체크아웃 세션이 열린 직후의 `pending` 레코드를 생성합니다.
    pub fn pending(
        user_id: ObjectId,
        tutor_id: ObjectId,
        course_id: ObjectId,
        category_id: ObjectId,
        price: f64,
        payment_id: String,
    ) -> Self {
        Self {
            id: None,
            user_id,
            tutor_id,
            course_id,
            category_id,
            price,
            payment_id,
            payment_method: PaymentMethod::Stripe,
            status: EnrollmentStatus::Pending,
            date_of_enrollment: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }

    pub fn is_paid(&self) -> bool {
        self.status == EnrollmentStatus::Paid
    }
}
