//! 결제 프로바이더 연동 모듈
//!
//! 수강 신청 서비스는 [`PaymentGateway`] 트레이트에만 의존합니다.
//! 운영 구현은 Stripe 체크아웃 세션 REST API를 호출하는 [`StripeGateway`]입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let gateway = StripeGateway::new(StripeConfig::secret_key()?, StripeConfig::api_base());
//! let session = gateway.create_checkout_session(&request).await?;
//! let status = gateway.retrieve_session(&session.session_id).await?;
//! ```

pub mod stripe_gateway;

use crate::core::errors::AppResult;
use crate::domain::models::payment::{CheckoutRequest, CheckoutSession, ProviderSession};

pub use stripe_gateway::StripeGateway;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// 단일 품목 결제용 체크아웃 세션을 엽니다.
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> AppResult<CheckoutSession>;

    /// 세션의 현재 결제 상태를 조회합니다.
    async fn retrieve_session(&self, session_id: &str) -> AppResult<ProviderSession>;

    /// 아직 열려 있는 세션을 만료시킵니다.
    async fn expire_session(&self, session_id: &str) -> AppResult<()>;
}
