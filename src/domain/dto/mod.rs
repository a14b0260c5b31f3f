//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//!
//! ```text
//! dto/
//! ├── enrollments/
//! │   ├── request.rs    - 생성/검증 요청 본문, 목록 조회 쿼리
//! │   └── response.rs   - 생성 결과, 검증 결과, 목록 항목
//! └── pagination.rs     - 페이지 요청 보정과 응답 페이지 정보
//! ```

pub mod enrollments;
pub mod pagination;

pub use enrollments::*;
pub use pagination::*;
