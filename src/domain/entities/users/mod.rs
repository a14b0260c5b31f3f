//! Users Entity Module
//!
//! 구매자 계정 문서(`users` 컬렉션)의 읽기 전용 표현입니다.

pub mod user;

pub use user::User;
