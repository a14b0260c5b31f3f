//! # Domain Models Module
//!
//! 영속 엔티티가 아닌 도메인 값 객체와 외부 협력자 계약 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 직접 저장되는 문서
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체, 외부 시스템과 주고받는 모델
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/          ← 인증된 사용자, 역할 요구사항
//! ├── token/         ← JWT 클레임
//! ├── payment/       ← 체크아웃 세션 요청/응답
//! ├── notification/  ← 결제 완료 알림 메일 내용
//! └── enrollment/    ← 목록 조회 필터와 정렬 키
//! ```

pub mod auth;
pub mod token;
pub mod payment;
pub mod notification;
pub mod enrollment;
