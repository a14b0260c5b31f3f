//! Stripe 체크아웃 세션 클라이언트
//!
//! | 동작 | 요청 |
//! |------|------|
//! | 세션 생성 | `POST /v1/checkout/sessions` (form) |
//! | 세션 조회 | `GET /v1/checkout/sessions/{id}` |
//! | 세션 만료 | `POST /v1/checkout/sessions/{id}/expire` |
//!
//! 모든 요청은 `Authorization: Bearer {secret}` 헤더로 인증합니다.
//! 세션 생성에는 매 호출마다 새 `Idempotency-Key`를 붙여, 네트워크 재전송이 세션을 중복 생성하지 않게 합니다.

use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::payment::{CheckoutRequest, CheckoutSession, ProviderSession};
use super::PaymentGateway;

pub struct StripeGateway {
    client: Client,
    secret_key: String,
    api_base: String,
}

/// 세션 생성 응답 중 필요한 필드
#[derive(Debug, Deserialize)]
struct CreatedSession {
    id: String,
    url: Option<String>,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            secret_key: secret_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn sessions_url(&self) -> String {
        format!("{}/v1/checkout/sessions", self.api_base)
    }

    fn session_url(&self, session_id: &str) -> String {
        format!("{}/{}", self.sessions_url(), urlencoding::encode(session_id))
    }

    /// 체크아웃 요청을 Stripe form 파라미터로 펼칩니다.
    fn form_params(request: &CheckoutRequest) -> Vec<(&'static str, String)> {
        vec![
            ("mode", "payment".to_string()),
            ("line_items[0][quantity]", "1".to_string()),
            ("line_items[0][price_data][currency]", request.currency.clone()),
            ("line_items[0][price_data][unit_amount]", request.amount_minor.to_string()),
            ("line_items[0][price_data][product_data][name]", request.item_name.clone()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
            ("metadata[userId]", request.metadata.user_id.clone()),
            ("metadata[courseId]", request.metadata.course_id.clone()),
            ("metadata[tutorId]", request.metadata.tutor_id.clone()),
            ("metadata[categoryId]", request.metadata.category_id.clone()),
        ]
    }

    /// 2xx가 아닌 응답을 `ExternalServiceError`로 변환합니다.
    async fn ensure_success(response: reqwest::Response, action: &str) -> AppResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("Stripe {} 실패 ({}): {}", action, status, error_text);

        Err(AppError::ExternalServiceError(format!(
            "Stripe {} 실패: HTTP {}",
            action, status
        )))
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> AppResult<CheckoutSession> {
        let response = self
            .client
            .post(self.sessions_url())
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", uuid::Uuid::new_v4().to_string())
            .form(&Self::form_params(request))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 생성 요청 실패: {}", e)))?;

        let created = Self::ensure_success(response, "세션 생성")
            .await?
            .json::<CreatedSession>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 응답 파싱 실패: {}", e)))?;

        let checkout_url = created.url.ok_or_else(|| {
            AppError::ExternalServiceError("Stripe 세션 응답에 결제 URL이 없습니다".to_string())
        })?;

        debug!("Stripe 체크아웃 세션 생성: {}", created.id);

        Ok(CheckoutSession {
            session_id: created.id,
            checkout_url,
        })
    }

    async fn retrieve_session(&self, session_id: &str) -> AppResult<ProviderSession> {
        let response = self
            .client
            .get(self.session_url(session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 조회 요청 실패: {}", e)))?;

        Self::ensure_success(response, "세션 조회")
            .await?
            .json::<ProviderSession>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 응답 파싱 실패: {}", e)))
    }

    async fn expire_session(&self, session_id: &str) -> AppResult<()> {
        let response = self
            .client
            .post(format!("{}/expire", self.session_url(session_id)))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 만료 요청 실패: {}", e)))?;

        Self::ensure_success(response, "세션 만료").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::domain::models::payment::CheckoutMetadata;

    fn checkout_request() -> CheckoutRequest {
        CheckoutRequest {
            item_name: "Rust 입문".to_string(),
            amount_minor: 49_900,
            currency: "inr".to_string(),
            success_url: "http://localhost:3000/payment/success?session_id={CHECKOUT_SESSION_ID}".to_string(),
            cancel_url: "http://localhost:3000/payment/cancel".to_string(),
            metadata: CheckoutMetadata {
                user_id: "665f1b2c3d4e5f6a7b8c9d10".to_string(),
                course_id: "665f1b2c3d4e5f6a7b8c9d01".to_string(),
                tutor_id: "665f1b2c3d4e5f6a7b8c9d02".to_string(),
                category_id: "665f1b2c3d4e5f6a7b8c9d03".to_string(),
            },
        }
    }

    #[test]
    fn test_form_params_cover_line_item_and_metadata() {
        let params = StripeGateway::form_params(&checkout_request());
        let get = |key: &str| params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());

        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("49900"));
        assert_eq!(get("line_items[0][price_data][product_data][name]"), Some("Rust 입문"));
        assert_eq!(get("metadata[courseId]"), Some("665f1b2c3d4e5f6a7b8c9d01"));
    }

    #[actix_web::test]
    async fn test_create_checkout_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(header("authorization", "Bearer sk_test_123"))
            .and(header_exists("idempotency-key"))
            .and(body_string_contains("mode=payment"))
            .and(body_string_contains("49900"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_abc",
                "url": "https://checkout.stripe.com/c/pay/cs_test_abc",
                "payment_status": "unpaid",
                "status": "open"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = StripeGateway::new("sk_test_123", server.uri());
        let session = gateway.create_checkout_session(&checkout_request()).await.unwrap();

        assert_eq!(session.session_id, "cs_test_abc");
        assert_eq!(session.checkout_url, "https://checkout.stripe.com/c/pay/cs_test_abc");
    }

    #[actix_web::test]
    async fn test_create_checkout_session_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "message": "Invalid currency" }
            })))
            .mount(&server)
            .await;

        let gateway = StripeGateway::new("sk_test_123", server.uri());
        let result = gateway.create_checkout_session(&checkout_request()).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_retrieve_session() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/checkout/sessions/cs_test_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_abc",
                "payment_status": "paid",
                "status": "complete"
            })))
            .mount(&server)
            .await;

        let gateway = StripeGateway::new("sk_test_123", server.uri());
        let session = gateway.retrieve_session("cs_test_abc").await.unwrap();

        assert!(session.is_paid());
        assert!(!session.is_expired());
    }

    #[actix_web::test]
    async fn test_retrieve_unknown_session() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/checkout/sessions/cs_missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let gateway = StripeGateway::new("sk_test_123", server.uri());

        assert!(matches!(
            gateway.retrieve_session("cs_missing").await,
            Err(AppError::ExternalServiceError(_))
        ));
    }

    #[actix_web::test]
    async fn test_expire_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions/cs_test_abc/expire"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_abc",
                "payment_status": "unpaid",
                "status": "expired"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = StripeGateway::new("sk_test_123", format!("{}/", server.uri()));
        gateway.expire_session("cs_test_abc").await.unwrap();
    }
}
