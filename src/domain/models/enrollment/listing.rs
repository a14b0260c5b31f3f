//! 수강 신청 목록 조회 조건
//!
//! 쿼리 문자열에서 검증을 마친 값만 담기며, 리포지토리는 이 값으로 집계 파이프라인을 만듭니다.

use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::entities::EnrollmentStatus;

/// 관리자 목록 정렬 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentSort {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    BuyerName,
    CourseTitle,
}

impl EnrollmentSort {
    /// `sortBy` 값을 해석합니다. 없거나 알 수 없는 값은 `Newest`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("oldest") => EnrollmentSort::Oldest,
            Some("price_asc") => EnrollmentSort::PriceAsc,
            Some("price_desc") => EnrollmentSort::PriceDesc,
            Some("buyer_name") => EnrollmentSort::BuyerName,
            Some("course_title") => EnrollmentSort::CourseTitle,
            _ => EnrollmentSort::Newest,
        }
    }
}

/// 구매자 본인 목록 조건 (`paid`만 조회)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuyerListFilter {
    /// 강의 제목 또는 강사 이름 부분 일치 (대소문자 무시)
    pub search: Option<String>,
}

/// 관리자 목록 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminListFilter {
    /// 구매자 이름/이메일, 강의 제목, 강사 이름 부분 일치
    pub search: Option<String>,
    pub status: Option<EnrollmentStatus>,
    /// `dateOfEnrollment >= start`
    pub start: Option<DateTime<Utc>>,
    /// `dateOfEnrollment <= end`
    pub end: Option<DateTime<Utc>>,
    pub sort: EnrollmentSort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// 날짜 필터 값을 해석합니다.
///
/// `YYYY-MM-DD`는 UTC 기준 하루 전체를 포함하도록 시작일은 00:00:00.000,
/// 종료일은 23:59:59.999로 변환합니다. RFC 3339 값은 그 시각 그대로 사용합니다.
pub fn parse_date_bound(raw: &str, bound: DateBound) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let naive = match bound {
        DateBound::Start => date.and_hms_milli_opt(0, 0, 0, 0)?,
        DateBound::End => date.and_hms_milli_opt(23, 59, 59, 999)?,
    };
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse() {
        assert_eq!(EnrollmentSort::parse(None), EnrollmentSort::Newest);
        assert_eq!(EnrollmentSort::parse(Some("oldest")), EnrollmentSort::Oldest);
        assert_eq!(EnrollmentSort::parse(Some("PRICE_ASC")), EnrollmentSort::PriceAsc);
        assert_eq!(EnrollmentSort::parse(Some("buyer_name")), EnrollmentSort::BuyerName);
        assert_eq!(EnrollmentSort::parse(Some("course_title")), EnrollmentSort::CourseTitle);
        assert_eq!(EnrollmentSort::parse(Some("rating")), EnrollmentSort::Newest);
    }

    #[test]
    fn test_plain_date_covers_whole_day() {
        let start = parse_date_bound("2024-06-01", DateBound::Start).unwrap();
        let end = parse_date_bound("2024-06-01", DateBound::End).unwrap();

        assert_eq!(start.to_rfc3339(), "2024-06-01T00:00:00+00:00");
        assert_eq!(end.timestamp_millis() - start.timestamp_millis(), 86_399_999);
    }

    #[test]
    fn test_rfc3339_is_used_as_is() {
        let instant = parse_date_bound("2024-06-01T09:30:00+09:00", DateBound::End).unwrap();

        assert_eq!(instant.to_rfc3339(), "2024-06-01T00:30:00+00:00");
    }

    #[test]
    fn test_garbage_date_is_rejected() {
        assert!(parse_date_bound("yesterday", DateBound::Start).is_none());
        assert!(parse_date_bound("2024-13-01", DateBound::Start).is_none());
    }
}
