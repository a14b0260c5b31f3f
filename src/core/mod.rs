//! # Core Module
//!
//! 모든 계층이 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 봉투 응답 자동 변환
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트를 붙여 변환
//!
//! ### [`response`] - 응답 봉투
//! - **ApiResponse**: `{success, message, data}` 형태의 공통 응답
//!
//! ## 에러 처리 흐름
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("")]
//! pub async fn create_enrollment(
//!     service: web::Data<EnrollmentService>,
//!     payload: web::Json<CreateEnrollmentRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     // 서비스에서 발생한 AppError는 그대로 봉투 응답으로 변환됩니다
//!     let created = service.create_enrollment(&user.user_id, input).await?;
//!     Ok(HttpResponse::Created().json(ApiResponse::success("...", created)))
//! }
//! ```

pub mod errors;
pub mod response;

pub use errors::*;
pub use response::*;
