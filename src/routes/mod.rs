//! API 라우트 설정 모듈
//!
//! 수강 신청 엔드포인트를 역할별 스코프로 묶고, 헬스체크와 요청 추출 에러 처리를 등록합니다.
//!
//! # Auth Middleware Usage
//!
//! | 스코프 | 미들웨어 | 엔드포인트 |
//! |--------|----------|------------|
//! | `/enrollment/admin` | `required_with_role("admin")` | 관리자 목록 |
//! | `/enrollment` | `required_with_role("user")` | 생성, 검증, 내 목록, 수강 여부 |
//! | `/health` | 없음 | 헬스체크 |
//!
//! `/enrollment/admin` 스코프는 `/enrollment`보다 먼저 등록해야 관리자 요청이
//! 구매자 스코프의 역할 검사에 걸리지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let app = App::new()
//!     .app_data(enrollment_service.clone())
//!     .app_data(token_service.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::core::response::ApiResponse;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_enrollment_routes(cfg);
}

fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    // 관리자 라우트
    cfg.service(
        web::scope("/enrollment/admin")
            .wrap(AuthMiddleware::required_with_role("admin"))
            .service(handlers::enrollments::list_all_enrollments)
    );

    // 구매자 라우트
    cfg.service(
        web::scope("/enrollment")
            .wrap(AuthMiddleware::required_with_role("user"))
            .service(handlers::enrollments::create_enrollment)
            .service(handlers::enrollments::verify_payment)
            .service(handlers::enrollments::list_my_enrollments)
            .service(handlers::enrollments::check_enrollment)
    );
}

/// JSON 본문 추출 실패를 봉투 형식의 400 응답으로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("요청 본문이 올바르지 않습니다: {}", err)).into()
    })
}

/// 쿼리 문자열 추출 실패를 봉투 형식의 400 응답으로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("쿼리 파라미터가 올바르지 않습니다: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        "healthy",
        json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    ))
}
