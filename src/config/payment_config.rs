//! # Payment Configuration Module
//!
//! 결제 프로바이더(Stripe)와 체크아웃 리다이렉트 관련 설정을 관리합니다.
//!
//! ```bash
//! export STRIPE_SECRET_KEY="sk_test_..."
//! export STRIPE_API_BASE="https://api.stripe.com"   # 기본값
//! export CLIENT_URL="http://localhost:3000"
//! export PAYMENT_CURRENCY="inr"                     # 기본값
//! ```

use std::env;
use crate::core::errors::{AppError, AppResult};

/// Stripe REST API 설정
pub struct StripeConfig;

impl StripeConfig {
    /// Stripe 비밀키
    ///
    /// 로그에 출력하지 마세요. 설정되지 않은 경우 서버를 시작할 수 없습니다.
    pub fn secret_key() -> AppResult<String> {
        env::var("STRIPE_SECRET_KEY")
            .map_err(|_| AppError::InternalError("STRIPE_SECRET_KEY must be set".to_string()))
    }

    /// Stripe API 베이스 URL
    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

/// 체크아웃 리다이렉트/통화 설정
pub struct CheckoutConfig;

impl CheckoutConfig {
    /// 결제 완료/취소 후 돌아갈 프론트엔드 URL
    pub fn client_url() -> String {
        env::var("CLIENT_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    /// 결제 통화 (ISO 4217 소문자)
    pub fn currency() -> String {
        env::var("PAYMENT_CURRENCY")
            .unwrap_or_else(|_| "inr".to_string())
            .to_lowercase()
    }
}

/// 수강 신청 서비스에 주입되는 체크아웃 설정 값
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSettings {
    pub client_url: String,
    pub currency: String,
}

impl CheckoutSettings {
    pub fn new(client_url: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            client_url: client_url.into().trim_end_matches('/').to_string(),
            currency: currency.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(CheckoutConfig::client_url(), CheckoutConfig::currency())
    }

    /// 결제 성공 리다이렉트 URL
    ///
    /// `{CHECKOUT_SESSION_ID}`는 Stripe가 실제 세션 ID로 치환하는 템플릿 변수입니다.
    pub fn success_url(&self) -> String {
        format!("{}/payment/success?session_id={{CHECKOUT_SESSION_ID}}", self.client_url)
    }

    /// 결제 취소 리다이렉트 URL
    pub fn cancel_url(&self) -> String {
        format!("{}/payment/cancel", self.client_url)
    }
}
