//! JWT 액세스 토큰 클레임
//!
//! 토큰은 인증 서비스가 발급하며, 이 서비스는 서명과 만료만 검증합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ObjectId 문자열)
/// - `roles`: `user` | `tutor` | `admin`
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - `email`: 사용자 이메일 (선택사항)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
