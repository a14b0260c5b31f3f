//! 결제 프로바이더와 주고받는 체크아웃 세션 모델
//!
//! 프로바이더 구현(Stripe)과 무관한 형태로 정의되며,
//! 수강 신청 서비스는 이 타입들만 사용합니다.

use serde::{Deserialize, Serialize};

/// 체크아웃 세션 메타데이터
///
/// 세션과 수강 신청을 연결하는 ID들로, 프로바이더 대시보드에서도 확인할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutMetadata {
    pub user_id: String,
    pub course_id: String,
    pub tutor_id: String,
    pub category_id: String,
}

/// 체크아웃 세션 생성 요청
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    /// 결제 화면에 표시할 품목명 (강의 제목)
    pub item_name: String,
    /// 최소 화폐 단위 금액 (예: 499.00 → 49900)
    pub amount_minor: i64,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: CheckoutMetadata,
}

/// 통화 단위 가격을 최소 화폐 단위로 변환합니다.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// 생성된 체크아웃 세션
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub session_id: String,
    /// 구매자를 리다이렉트할 호스팅 결제 페이지 URL
    pub checkout_url: String,
}

/// 프로바이더가 보고한 세션 상태
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderSession {
    /// `paid` | `unpaid` | `no_payment_required`
    pub payment_status: String,
    /// `open` | `complete` | `expired`
    pub status: String,
}

impl ProviderSession {
    /// 결제가 정산되었는지
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    /// 결제 없이 세션이 만료되었는지
    pub fn is_expired(&self) -> bool {
        self.status == "expired"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units_rounding() {
        assert_eq!(to_minor_units(499.0), 49_900);
        assert_eq!(to_minor_units(19.99), 1_999);
        assert_eq!(to_minor_units(0.5), 50);
    }

    #[test]
    fn test_provider_session_flags() {
        let paid = ProviderSession { payment_status: "paid".into(), status: "complete".into() };
        let expired = ProviderSession { payment_status: "unpaid".into(), status: "expired".into() };
        let open = ProviderSession { payment_status: "unpaid".into(), status: "open".into() };

        assert!(paid.is_paid() && !paid.is_expired());
        assert!(!expired.is_paid() && expired.is_expired());
        assert!(!open.is_paid() && !open.is_expired());
    }
}
