//! 수강 신청 요청 DTO
//!
//! HTTP 경계에서 입력을 검증하고, 검증이 끝난 값만 강타입으로 변환해 서비스로 넘깁니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::pagination::PageRequest;
use crate::domain::entities::EnrollmentStatus;
use crate::domain::models::enrollment::{
    parse_date_bound, AdminListFilter, BuyerListFilter, DateBound, EnrollmentSort,
};
use crate::utils::string_utils::deserialize_optional_string;

/// 수강 신청(체크아웃 시작) 요청
///
/// ```json
/// { "courseId": "665f...", "tutorId": "665f...", "categoryId": "665f...", "price": 499 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_object_id"))]
    pub course_id: String,

    #[serde(default)]
    #[validate(custom(function = "validate_object_id"))]
    pub tutor_id: String,

    #[serde(default)]
    #[validate(custom(function = "validate_object_id"))]
    pub category_id: String,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "가격은 0보다 커야 합니다"))]
    pub price: f64,
}

/// 검증이 끝난 수강 신청 입력
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub course_id: ObjectId,
    pub tutor_id: ObjectId,
    pub category_id: ObjectId,
    pub price: f64,
}

impl CreateEnrollmentRequest {
    /// 필드 검증 후 강타입 입력으로 변환합니다.
    pub fn into_new_enrollment(self) -> AppResult<NewEnrollment> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(NewEnrollment {
            course_id: parse_object_id(&self.course_id, "courseId")?,
            tutor_id: parse_object_id(&self.tutor_id, "tutorId")?,
            category_id: parse_object_id(&self.category_id, "categoryId")?,
            price: self.price,
        })
    }
}

/// 결제 검증 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "sessionId는 필수입니다"))]
    pub session_id: String,
}

/// 내 수강 목록 조회 쿼리
///
/// `page`/`limit`은 숫자가 아니어도 요청을 거부하지 않도록 문자열로 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyEnrollmentsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
}

impl MyEnrollmentsQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn to_filter(&self) -> BuyerListFilter {
        BuyerListFilter { search: self.search.clone() }
    }
}

/// 관리자 수강 신청 목록 조회 쿼리
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEnrollmentsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sort_by: Option<String>,
}

impl AdminEnrollmentsQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }

    /// 필터 값을 검증하고 강타입 필터로 변환합니다.
    ///
    /// 알 수 없는 `status`, 해석할 수 없는 날짜, 시작일이 종료일보다 늦은 범위는 검증 에러입니다.
    /// 알 수 없는 `sortBy`는 기본 정렬(`newest`)로 처리합니다.
    pub fn to_filter(&self) -> AppResult<AdminListFilter> {
        let status = match self.status.as_deref() {
            Some(raw) => Some(EnrollmentStatus::parse(raw).ok_or_else(|| {
                AppError::ValidationError(format!("알 수 없는 상태값입니다: {}", raw))
            })?),
            None => None,
        };

        let start = match self.start_date.as_deref() {
            Some(raw) => Some(parse_date_bound(raw, DateBound::Start).ok_or_else(|| {
                AppError::ValidationError(format!("startDate 형식이 올바르지 않습니다: {}", raw))
            })?),
            None => None,
        };

        let end = match self.end_date.as_deref() {
            Some(raw) => Some(parse_date_bound(raw, DateBound::End).ok_or_else(|| {
                AppError::ValidationError(format!("endDate 형식이 올바르지 않습니다: {}", raw))
            })?),
            None => None,
        };

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::ValidationError(
                    "startDate는 endDate보다 늦을 수 없습니다".to_string(),
                ));
            }
        }

        Ok(AdminListFilter {
            search: self.search.clone(),
            status,
            start,
            end,
            sort: EnrollmentSort::parse(self.sort_by.as_deref()),
        })
    }
}

/// 24자리 16진수 ObjectId 형식 검증
fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if ObjectId::parse_str(value).is_err() {
        return Err(ValidationError::new("invalid_object_id")
            .with_message("유효하지 않은 ID 형식입니다".into()));
    }
    Ok(())
}

/// 문자열을 ObjectId로 변환합니다. 실패 시 필드명을 포함한 검증 에러를 반환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("{}: 유효하지 않은 ID 형식입니다", field_name)))
}
