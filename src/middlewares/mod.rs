//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 헤더 또는 액세스 토큰 쿠키에서 JWT 추출
//! - `web::Data<TokenService>`로 서명/만료 검증
//! - 사용자 정보를 request extension에 저장 ([`AuthenticatedUser`] 추출자가 사용)
//! - 역할 요구사항 검증 (부족하면 403)
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/enrollment/admin")
//!             .wrap(AuthMiddleware::required_with_role("admin"))
//!             .service(list_all_enrollments)
//!     )
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
