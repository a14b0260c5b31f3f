//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
//! 외부 시스템(결제, 메일)은 트레이트 뒤에 두어 테스트에서 mock으로 교체합니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`enrollments`] | 수강 신청 상태 머신, 목록 조회 |
//! | [`payments`] | 결제 프로바이더 체크아웃 세션 (Stripe) |
//! | [`mail`] | 결제 완료 알림 메일 |
//! | [`auth`] | JWT 액세스 토큰 검증 |

pub mod auth;
pub mod enrollments;
pub mod mail;
pub mod payments;
