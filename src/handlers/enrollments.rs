//! # Enrollment HTTP Handlers
//!
//! 수강 신청과 결제 검증 HTTP 엔드포인트를 처리합니다.
//! 모든 응답은 `{success, message, data}` 봉투로 감싸며, 에러는 `AppError`가 같은 형태로 변환합니다.
//!
//! | 메서드 | 경로 | 역할 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/enrollment` | user | 201 Created |
//! | `POST` | `/enrollment/verify` | user | 200 OK |
//! | `GET` | `/enrollment/mine` | user | 200 OK |
//! | `GET` | `/enrollment/verify/{course_id}` | user | 200 OK |
//! | `GET` | `/enrollment/admin` | admin | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::response::ApiResponse;
use crate::domain::dto::enrollments::{
    AdminEnrollmentsQuery, CreateEnrollmentRequest, MyEnrollmentsQuery, PaymentStatus,
    VerifyPaymentRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::enrollments::EnrollmentService;

/// 수강 신청 생성 (체크아웃 세션 시작)
///
/// ```bash
/// curl -X POST http://localhost:8080/enrollment \
///   -H "Authorization: Bearer eyJ..." \
///   -H "Content-Type: application/json" \
///   -d '{"courseId":"665f...","tutorId":"665f...","categoryId":"665f...","price":499}'
/// ```
#[post("")]
pub async fn create_enrollment(
    service: web::Data<EnrollmentService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateEnrollmentRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_new_enrollment()?;
    let created = service.create_enrollment(&user.user_id, input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "결제 세션이 생성되었습니다",
        created,
    )))
}

/// 결제 결과 확인
///
/// 결제 성공 페이지가 리다이렉트 URL의 `session_id`로 호출합니다.
#[post("/verify")]
pub async fn verify_payment(
    service: web::Data<EnrollmentService>,
    payload: web::Json<VerifyPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let verified = service.verify_payment(payload.session_id.trim()).await?;

    let message = match verified.payment_status {
        PaymentStatus::Verified => "결제가 확인되었습니다",
        PaymentStatus::Failed => "결제가 완료되지 않았습니다",
        PaymentStatus::Pending => "결제가 아직 진행 중입니다",
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(message, verified)))
}

#[get("/mine")]
pub async fn list_my_enrollments(
    service: web::Data<EnrollmentService>,
    user: AuthenticatedUser,
    query: web::Query<MyEnrollmentsQuery>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request();
    let list = service
        .list_my_enrollments(&user.user_id, &query.to_filter(), &page)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("수강 목록을 조회했습니다", list)))
}

#[get("/verify/{course_id}")]
pub async fn check_enrollment(
    service: web::Data<EnrollmentService>,
    user: AuthenticatedUser,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let checked = service.check_enrollment(&user.user_id, &course_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("수강 여부를 확인했습니다", checked)))
}

/// 관리자 전체 수강 신청 목록
///
/// ```bash
/// curl "http://localhost:8080/enrollment/admin?status=paid&startDate=2024-06-01&sortBy=price_desc" \
///   -H "Authorization: Bearer eyJ..."
/// ```
#[get("")]
pub async fn list_all_enrollments(
    service: web::Data<EnrollmentService>,
    query: web::Query<AdminEnrollmentsQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.to_filter()?;
    let page = query.page_request();
    let list = service.list_all_enrollments(&filter, &page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("수강 신청 목록을 조회했습니다", list)))
}
