//! HTTP 트랜잭션 메일 API 클라이언트
//!
//! `POST {api_url}`에 JSON 본문을 보냅니다.
//!
//! ```json
//! {
//!   "from": { "email": "no-reply@example.com", "name": "E-Learning" },
//!   "to": [{ "email": "buyer@example.com", "name": "Kim" }],
//!   "subject": "[수강 신청 완료] Rust 입문",
//!   "text": "..."
//! }
//! ```

use log::{error, info};
use reqwest::Client;
use serde::Serialize;
use crate::domain::models::notification::{PurchaseConfirmation, TutorEnrollmentNotice};
use super::Mailer;

pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from_address: String,
    from_name: String,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct OutgoingMail<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: String,
    text: String,
}

impl HttpMailer {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from_address: impl Into<String>,
        from_name: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            from_address: from_address.into(),
            from_name: from_name.into(),
        }
    }

    async fn send(&self, to_email: &str, to_name: &str, subject: String, text: String) -> bool {
        let mail = OutgoingMail {
            from: Address { email: &self.from_address, name: &self.from_name },
            to: vec![Address { email: to_email, name: to_name }],
            subject,
            text,
        };

        let result = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&mail)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("📧 메일 발송 완료: {}", to_email);
                true
            }
            Ok(response) => {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!("메일 발송 실패 ({}, HTTP {}): {}", to_email, status, error_text);
                false
            }
            Err(e) => {
                error!("메일 API 요청 실패 ({}): {}", to_email, e);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    async fn send_purchase_confirmation(&self, notice: &PurchaseConfirmation) -> bool {
        self.send(&notice.buyer_email, &notice.buyer_name, notice.subject(), notice.body())
            .await
    }

    async fn send_tutor_enrollment_notice(&self, notice: &TutorEnrollmentNotice) -> bool {
        self.send(&notice.tutor_email, &notice.tutor_name, notice.subject(), notice.body())
            .await
    }
}
