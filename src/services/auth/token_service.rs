//! JWT 액세스 토큰 검증 서비스
//!
//! 토큰 발급은 별도 인증 서비스가 담당합니다. 이 서비스는 HS256 서명과 만료 시간만 확인하고
//! 클레임을 [`AuthenticatedUser`]로 변환할 수 있게 돌려줍니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

#[derive(Clone)]
pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// 어떤 이유로든 검증에 실패하면 `AuthenticationError`(401)입니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
