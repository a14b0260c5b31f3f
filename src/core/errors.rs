//! # Application Error Handling System
//!
//! 수강 신청 백엔드의 통합 에러 처리 시스템입니다.
//! 모든 계층에서 발생한 에러는 `AppError` 하나로 모이고,
//! `actix_web::ResponseError` 구현을 통해 공통 응답 봉투(`{success, message, data}`)로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트 메시지 |
//! |----------|-------------|-------------------|
//! | `ValidationError` | 400 Bad Request | 상세 메시지 |
//! | `AuthenticationError` | 401 Unauthorized | 상세 메시지 |
//! | `AuthorizationError` | 403 Forbidden | 상세 메시지 |
//! | `NotFound` | 404 Not Found | 상세 메시지 |
//! | `ConflictError` | 409 Conflict | 상세 메시지 |
//! | `EmailError` | 500 Internal Server Error | 이메일 발송 실패 고정 메시지 |
//! | `DatabaseError` | 500 Internal Server Error | 일반 메시지 |
//! | `RedisError` | 500 Internal Server Error | 일반 메시지 |
//! | `ExternalServiceError` | 500 Internal Server Error | 일반 메시지 |
//! | `InternalError` | 500 Internal Server Error | 일반 메시지 |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let course = course_store
//!     .find_course(&course_id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("강의를 찾을 수 없습니다".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::core::response::ApiResponse;

/// 5xx 응답에 공통으로 사용하는 메시지
pub const GENERIC_FAILURE_MESSAGE: &str = "요청을 처리하는 중 서버 오류가 발생했습니다";

/// 알림 메일 발송 실패 시 사용하는 메시지
pub const EMAIL_FAILURE_MESSAGE: &str = "알림 이메일 발송에 실패했습니다";

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 실패
/// - `RedisError`: Redis 캐시 연산 실패
/// - `ExternalServiceError`: 결제 프로바이더 등 외부 API 호출 실패
/// - `EmailError`: 알림 메일 발송 실패 (결제 결과와 구분되는 에러)
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `ConflictError`: 이미 결제 완료된 수강 신청 등 비즈니스 규칙 위반
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 토큰 누락/만료/위조
/// - `AuthorizationError`: 역할 부족
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// 필수 필드 누락, 잘못된 ObjectId 형식, 0 이하의 가격,
    /// 알 수 없는 상태값, 잘못된 날짜 형식 등에서 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// 동일한 구매자/강의 조합에 이미 `paid` 상태의 수강 신청이 있을 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (500)
    ///
    /// 결제 세션 생성/조회 실패, 네트워크 타임아웃 등.
    /// 재시도하지 않고 그대로 호출자에게 전파됩니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 알림 메일 발송 에러 (500)
    ///
    /// 결제 상태는 이미 커밋된 이후에 발생할 수 있습니다.
    /// 이 에러를 받았다고 해서 결제가 실패한 것은 아니므로,
    /// 클라이언트는 수강 신청 상태를 다시 조회해야 합니다.
    #[error("Email error: {0}")]
    EmailError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원본 메시지를 그대로 사용하고,
    /// 5xx 에러는 내부 정보를 숨긴 고정 메시지를 사용합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::EmailError(_) => EMAIL_FAILURE_MESSAGE.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 성공 응답과 같은 봉투 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "success": false,
    ///   "message": "Human readable error message",
    ///   "data": null
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::debug!("요청 실패 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(ApiResponse::<()>::failure(self.client_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let cursor = collection.aggregate(pipeline).await
///     .context("수강 신청 목록 조회 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("가격은 0보다 커야 합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("수강 신청을 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 수강 중인 강의입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let error = AppError::ExternalServiceError("stripe: connection reset".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.client_message(), GENERIC_FAILURE_MESSAGE);
        assert!(!error.client_message().contains("stripe"));
    }

    #[test]
    fn test_email_error_is_distinct_from_generic_failure() {
        let error = AppError::EmailError("tutor notice rejected".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.client_message(), EMAIL_FAILURE_MESSAGE);
        assert_ne!(error.client_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[actix_web::test]
    async fn test_error_body_uses_envelope() {
        let error = AppError::ConflictError("이미 수강 중인 강의입니다".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "이미 수강 중인 강의입니다");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_redis_failure_maps_to_generic_server_error() {
        let error = AppError::from(redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "connection dropped",
        )));

        assert!(matches!(error, AppError::RedisError(ref msg) if msg.contains("connection dropped")));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.client_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
