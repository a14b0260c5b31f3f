//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Middlewares - 토큰 검증, 역할 확인
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 입력 추출/검증, 응답 봉투
//! ├─────────────────────────────────────────────┤
//!   Services - 수강 신청 상태 머신
//! ├─────────────────────────────────────────────┤
//!   Repositories / Payment / Mail
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data<EnrollmentService>`로 주입받고,
//! 인증된 사용자는 [`AuthenticatedUser`] 추출자로 받습니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

pub mod enrollments;
