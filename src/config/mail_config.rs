//! 알림 메일 발송 설정
//!
//! HTTP 기반 메일 발송 API(트랜잭션 메일 서비스)의 접속 정보와 발신자 정보를 관리합니다.
//!
//! ```bash
//! export MAIL_API_URL="https://mail.example.com/v1/send"
//! export MAIL_API_KEY="..."
//! export MAIL_FROM_ADDRESS="no-reply@example.com"
//! export MAIL_FROM_NAME="E-Learning"
//! ```

use std::env;
use crate::core::errors::{AppError, AppResult};

pub struct MailConfig;

impl MailConfig {
    pub fn api_url() -> AppResult<String> {
        env::var("MAIL_API_URL")
            .map_err(|_| AppError::InternalError("MAIL_API_URL must be set".to_string()))
    }

    pub fn api_key() -> AppResult<String> {
        env::var("MAIL_API_KEY")
            .map_err(|_| AppError::InternalError("MAIL_API_KEY must be set".to_string()))
    }

    pub fn from_address() -> String {
        env::var("MAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "no-reply@localhost".to_string())
    }

    pub fn from_name() -> String {
        env::var("MAIL_FROM_NAME")
            .unwrap_or_else(|_| "E-Learning".to_string())
    }
}
