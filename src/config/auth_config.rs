//! # Authentication Configuration Module
//!
//! 액세스 토큰 검증에 필요한 설정을 관리합니다.
//! 토큰 발급은 별도 인증 서비스의 책임이며, 이 서비스는 같은 비밀키로 서명을 검증만 합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```

use std::env;

/// JSON Web Token (JWT) 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰을 담는 쿠키 이름. 기본값: `access_token`
    pub fn cookie_name() -> String {
        env::var("JWT_COOKIE_NAME").unwrap_or_else(|_| "access_token".to_string())
    }
}
