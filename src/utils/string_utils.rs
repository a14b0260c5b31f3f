//! # 문자열 유틸리티
//!
//! 쿼리 파라미터 정리와 검색어 처리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 공백만 있는 문자열을 `None`으로 정리하고, 나머지는 앞뒤 공백을 제거합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde `deserialize_with`용: 빈 문자열을 `None`으로 취급
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 사용자 검색어를 MongoDB `$regex`의 리터럴 부분 일치 패턴으로 변환합니다.
///
/// 정규식 메타 문자를 모두 이스케이프하므로 검색어는 항상 문자 그대로 매칭됩니다.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
