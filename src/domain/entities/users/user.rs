//! User Entity Implementation
//!
//! 구매자(학습자) 문서입니다. 계정 생성/수정은 인증 서비스의 책임이며,
//! 이 서비스는 알림 메일 수신자 정보와 관리자 목록 검색을 위해 읽기만 합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
}
