//! 수강 신청 응답 DTO
//!
//! 모든 필드는 camelCase 로 직렬화되며, ObjectId는 16진수 문자열,
//! 날짜는 RFC 3339(UTC, 밀리초) 문자열로 내보냅니다.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use crate::domain::dto::pagination::Pagination;
use crate::domain::entities::{Enrollment, EnrollmentStatus, PaymentMethod};

/// 수강 신청(체크아웃 시작) 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentResponse {
    pub session_id: String,
    pub enrollment_id: String,
    pub checkout_url: String,
}

/// 수강 신청 레코드 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: String,
    pub user_id: String,
    pub tutor_id: String,
    pub course_id: String,
    pub category_id: String,
    pub price: f64,
    pub payment_id: String,
    pub payment_method: PaymentMethod,
    pub status: EnrollmentStatus,
    pub date_of_enrollment: String,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id_string().unwrap_or_default(),
            user_id: enrollment.user_id.to_hex(),
            tutor_id: enrollment.tutor_id.to_hex(),
            course_id: enrollment.course_id.to_hex(),
            category_id: enrollment.category_id.to_hex(),
            price: enrollment.price,
            payment_id: enrollment.payment_id,
            payment_method: enrollment.payment_method,
            status: enrollment.status,
            date_of_enrollment: format_bson_datetime(enrollment.date_of_enrollment),
        }
    }
}

/// 검증 결과로 보고되는 결제 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Verified,
    Failed,
    Pending,
}

impl From<EnrollmentStatus> for PaymentStatus {
    fn from(status: EnrollmentStatus) -> Self {
        match status {
            EnrollmentStatus::Paid => PaymentStatus::Verified,
            EnrollmentStatus::Failed => PaymentStatus::Failed,
            EnrollmentStatus::Pending => PaymentStatus::Pending,
        }
    }
}

/// 결제 검증 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub enrollment: EnrollmentResponse,
    pub payment_status: PaymentStatus,
}

/// 강의별 수강 여부 확인 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCheckResponse {
    pub is_enrolled: bool,
    pub enrollment_id: Option<String>,
}

/// 목록 조회에 조인되는 강의 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// 목록 조회에 조인되는 강사 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorSummary {
    pub id: String,
    pub name: String,
}

/// 관리자 목록에 조인되는 구매자 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 내 수강 목록 항목
///
/// 집계 파이프라인의 `$project` 결과를 그대로 역직렬화합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerEnrollmentItem {
    pub id: String,
    pub price: f64,
    pub status: EnrollmentStatus,
    pub payment_method: PaymentMethod,
    pub date_of_enrollment: String,
    pub course: CourseSummary,
    pub tutor: TutorSummary,
}

/// 관리자 수강 신청 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEnrollmentItem {
    pub id: String,
    pub price: f64,
    pub status: EnrollmentStatus,
    pub payment_id: String,
    pub payment_method: PaymentMethod,
    pub date_of_enrollment: String,
    pub user: BuyerSummary,
    pub course: CourseSummary,
    pub tutor: TutorSummary,
}

/// 페이지네이션된 목록 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentListResponse<T> {
    pub enrollments: Vec<T>,
    pub pagination: Pagination,
}

/// BSON 날짜를 `2024-06-01T10:00:00.000Z` 형식으로 변환합니다.
pub fn format_bson_datetime(value: bson::DateTime) -> String {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
