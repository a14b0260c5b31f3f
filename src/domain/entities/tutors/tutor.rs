use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 강사 문서 (`tutors` 컬렉션)
///
/// 신규 수강 알림 메일의 수신자로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
}
