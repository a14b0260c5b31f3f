//! 구매자 계정 조회 계층
//!
//! 알림 메일 수신자 정보를 읽기 위한 읽기 전용 저장소입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database.clone()));
//! let buyer = users.find_user(&user_id).await?;
//! ```

pub mod user_repo;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::entities::User;

pub use user_repo::MongoUserRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, user_id: &ObjectId) -> AppResult<Option<User>>;
}
