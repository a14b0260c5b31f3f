//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 조회 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 캐시 키
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `course:{courseId}` | 강의 문서 | 600초 |
//! | `enrollment:paid:{userId}:{courseId}` | 결제 완료된 수강 신청 | 600초 |
//!
//! `paid` 상태는 더 이상 바뀌지 않으므로 결제 완료 조회 결과만 캐싱합니다.
//! 조회 결과가 없을 때는 캐싱하지 않습니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

/// 캐시 항목 기본 TTL (초)
pub const DEFAULT_TTL_SECONDS: u64 = 600;
