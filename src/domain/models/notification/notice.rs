//! 결제 완료 후 발송되는 알림 메일 내용

use serde::Serialize;

/// 구매자에게 보내는 결제 완료 안내
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseConfirmation {
    pub buyer_email: String,
    pub buyer_name: String,
    pub course_title: String,
    pub tutor_name: String,
    pub price: f64,
}

impl PurchaseConfirmation {
    pub fn subject(&self) -> String {
        format!("[수강 신청 완료] {}", self.course_title)
    }

    pub fn body(&self) -> String {
        format!(
            "{}님, 안녕하세요.\n\n{} 강사님의 '{}' 강의 결제가 완료되었습니다.\n결제 금액: {:.2}\n\n지금 바로 학습을 시작해 보세요.",
            self.buyer_name, self.tutor_name, self.course_title, self.price
        )
    }
}

/// 강사에게 보내는 신규 수강생 안내
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorEnrollmentNotice {
    pub tutor_email: String,
    pub tutor_name: String,
    pub buyer_name: String,
    pub course_title: String,
    pub price: f64,
}

impl TutorEnrollmentNotice {
    pub fn subject(&self) -> String {
        format!("[신규 수강생] {}", self.course_title)
    }

    pub fn body(&self) -> String {
        format!(
            "{}님, 안녕하세요.\n\n{}님이 '{}' 강의를 수강 신청했습니다.\n결제 금액: {:.2}",
            self.tutor_name, self.buyer_name, self.course_title, self.price
        )
    }
}
