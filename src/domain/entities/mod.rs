//! # Domain Entities
//!
//! MongoDB에 저장되는 문서 타입들입니다.
//!
//! | 엔티티 | 컬렉션 | 이 서비스에서의 역할 |
//! |--------|--------|----------------------|
//! | [`Enrollment`] | `enrollments` | 생성 및 상태 전이 |
//! | [`Course`] | `courses` | 읽기 전용 (체크아웃 품목명, 목록 조인) |
//! | [`User`] | `users` | 읽기 전용 (메일 수신자, 관리자 검색) |
//! | [`Tutor`] | `tutors` | 읽기 전용 (메일 수신자, 목록 조인) |
//!
//! ## 주의사항
//!
//! - **ID 참조**: 엔티티 간 관계는 ObjectId 참조로만 표현하며 연쇄 삭제는 없습니다
//! - **인덱스 설계**: 조회 패턴에 맞는 복합 인덱스는 리포지토리가 시작 시 생성합니다

pub mod enrollments;
pub mod users;
pub mod tutors;
pub mod courses;

pub use enrollments::*;
pub use users::*;
pub use tutors::*;
pub use courses::*;
