//! Enrollments Entity Module
//!
//! 수강 신청 레코드와 그 상태 값을 정의합니다.
//! 상태(`status`)를 바꾸는 주체는 수강 신청 서비스 하나뿐입니다.

pub mod enrollment;

pub use enrollment::{Enrollment, EnrollmentStatus, PaymentMethod};
