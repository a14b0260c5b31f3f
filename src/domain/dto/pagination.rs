//! 공통 페이지네이션 DTO
//!
//! 잘못된 `page`/`limit` 값은 거부하지 않고 허용 범위로 보정합니다.
//!
//! | 파라미터 | 기본값 | 파싱 불가 | 범위 밖 |
//! |----------|--------|-----------|---------|
//! | `page` | 1 | 1 | `< 1` → 1, `> MAX_PAGE` → `MAX_PAGE` |
//! | `limit` | 10 | 10 | `< 1` → 1, `> 100` → 100 |

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// `skip`이 MongoDB의 i64 범위를 넘지 않는 최대 페이지
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// 보정이 끝난 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT }
    }
}

impl PageRequest {
    /// 정수 값을 허용 범위로 보정합니다.
    pub fn clamped(page: i64, limit: i64) -> Self {
        Self {
            page: (page.max(1) as u64).min(MAX_PAGE),
            limit: limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }

    /// 쿼리 문자열 원본 값에서 페이지 요청을 만듭니다.
    ///
    /// 숫자로 해석할 수 없는 값은 기본값으로 취급합니다.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE as i64);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT as i64);

        Self::clamped(page, limit)
    }

    /// `(page - 1) * limit`
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// 저장소에서 읽어온 한 페이지 분량의 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// 응답에 포함되는 페이지 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(request: &PageRequest, total_count: u64) -> Self {
        Self {
            current_page: request.page,
            total_pages: total_count.div_ceil(request.limit),
            total_count,
            limit: request.limit,
        }
    }
}
