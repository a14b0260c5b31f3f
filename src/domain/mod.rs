//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 저장 문서와 전송 객체, 값 객체를 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서 (Enrollment, Course, User, Tutor)
//! ├── DTOs      - HTTP 요청/응답 (검증 포함)
//! └── Models    - 인증 정보, 결제 세션, 알림, 목록 필터
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, 외부 API)
//! ```
//!
//! ## 수강 신청 흐름에서의 변환
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기 + 검증 후 강타입 변환
//! let input: NewEnrollment = payload.into_inner().into_new_enrollment()?;
//!
//! // 2. 서비스가 엔티티 생성 및 저장
//! let enrollment = Enrollment::pending(buyer_id, input.tutor_id, input.course_id, input.category_id, input.price, session_id);
//!
//! // 3. 응답 DTO로 변환
//! let response = EnrollmentResponse::from(enrollment);
//! ```

pub mod entities;
pub mod dto;
pub mod models;
