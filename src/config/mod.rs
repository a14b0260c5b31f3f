//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 각 설정은 필드 없는 구조체의 연관 함수로 노출되며, 호출 시점에 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 요청 제한 설정
//! - [`auth_config`] - JWT 검증 설정
//! - [`payment_config`] - Stripe 및 체크아웃 리다이렉트 설정
//! - [`mail_config`] - 알림 메일 API 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="elearning_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 결제
//! export STRIPE_SECRET_KEY="sk_test_..."
//! export CLIENT_URL="http://localhost:3000"
//!
//! # 메일
//! export MAIL_API_URL="https://mail.example.com/v1/send"
//! export MAIL_API_KEY="..."
//! ```
//!
//! `PROFILE=dev|prod` 값에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod data_config;
pub mod auth_config;
pub mod payment_config;
pub mod mail_config;

pub use data_config::*;
pub use auth_config::*;
pub use payment_config::*;
pub use mail_config::*;
