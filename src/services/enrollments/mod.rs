//! 수강 신청 서비스 모듈
//!
//! 체크아웃 시작, 결제 검증, 목록 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let service = EnrollmentService::new(
//!     enrollments, courses, users, tutors, payments, mailer,
//!     CheckoutSettings::from_env(),
//! );
//! let created = service.create_enrollment(&user.user_id, input).await?;
//! let verified = service.verify_payment(&created.session_id).await?;
//! ```

pub mod enrollment_service;

pub use enrollment_service::EnrollmentService;
