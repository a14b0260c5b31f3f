//! 인증 서비스 모듈
//!
//! 외부 인증 서비스가 발급한 JWT 액세스 토큰을 검증합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&JwtConfig::secret());
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
