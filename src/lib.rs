//! # E-Learning Enrollment Backend
//!
//! 강의 수강 신청과 체크아웃 기반 결제 검증을 담당하는 백엔드 서비스입니다.
//!
//! ## 수강 신청 흐름
//!
//! ```text
//! POST /enrollment          ─▶ Stripe 체크아웃 세션 생성 ─▶ pending 레코드 저장
//!        │
//!   (구매자 결제)
//!        │
//! POST /enrollment/verify   ─▶ 세션 상태 조회 ─▶ pending → paid | failed
//!                                                  └─▶ (paid) 구매자/강사 알림 메일
//! ```
//!
//! ## 모듈 구성
//!
//! - [`core`]: 공통 에러 타입과 응답 봉투
//! - [`config`]: 환경 변수 기반 설정
//! - [`db`], [`caching`]: MongoDB, Redis 연결
//! - [`domain`]: 엔티티, DTO, 도메인 모델
//! - [`repositories`]: 저장소 트레이트와 MongoDB 구현
//! - [`services`]: 수강 신청 상태 머신, 결제/메일/토큰 서비스
//! - [`handlers`], [`routes`], [`middlewares`]: HTTP 계층
//! - [`utils`]: 문자열/터미널 유틸리티

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
