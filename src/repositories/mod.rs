//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 하위 모듈은 서비스가 의존하는 저장소 트레이트와 MongoDB 구현을 함께 제공합니다.
//! 구현체는 `main`에서 명시적으로 생성되어 `Arc<dyn Trait>`으로 서비스에 주입됩니다.
//!
//! | 트레이트 | 구현 | 캐시 |
//! |----------|------|------|
//! | [`EnrollmentStore`](enrollments::EnrollmentStore) | `MongoEnrollmentRepository` | `enrollment:paid:{user}:{course}` |
//! | [`CourseStore`](courses::CourseStore) | `MongoCourseRepository` | `course:{id}` |
//! | [`UserStore`](users::UserStore) | `MongoUserRepository` | - |
//! | [`TutorStore`](tutors::TutorStore) | `MongoTutorRepository` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! let enrollments = Arc::new(MongoEnrollmentRepository::new(database.clone(), redis.clone()));
//! enrollments.create_indexes().await?;
//! ```

pub mod enrollments;
pub mod courses;
pub mod users;
pub mod tutors;
