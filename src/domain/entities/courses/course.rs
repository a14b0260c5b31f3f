//! Course Entity
//!
//! 챕터/레슨 등 강의 콘텐츠 구조는 다루지 않고, 결제와 목록 조회에 필요한 필드만 읽습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub tutor_id: ObjectId,
    pub category_id: ObjectId,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
