//! 공통 API 응답 봉투
//!
//! 모든 엔드포인트는 성공/실패와 무관하게 같은 형태로 응답합니다.
//!
//! ```json
//! { "success": true, "message": "수강 신청이 생성되었습니다", "data": { ... } }
//! { "success": false, "message": "이미 수강 중인 강의입니다", "data": null }
//! ```

use serde::{Deserialize, Serialize};

/// `{success, message, data}` 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    /// 실패 응답에서는 항상 `null`
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
