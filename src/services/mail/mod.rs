//! 알림 메일 발송 모듈
//!
//! 발송 실패는 에러가 아니라 `false`로 보고됩니다. 결제 상태는 메일 결과와 무관하게 확정되며,
//! 호출자가 실패를 응답에 어떻게 반영할지 결정합니다.

pub mod http_mailer;

use crate::domain::models::notification::{PurchaseConfirmation, TutorEnrollmentNotice};

pub use http_mailer::HttpMailer;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// 구매자 결제 완료 메일. 발송 성공 여부를 반환합니다.
    async fn send_purchase_confirmation(&self, notice: &PurchaseConfirmation) -> bool;

    /// 강사 신규 수강생 메일. 발송 성공 여부를 반환합니다.
    async fn send_tutor_enrollment_notice(&self, notice: &TutorEnrollmentNotice) -> bool;
}
