//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 쿼리 문자열 정리, 검색어 정규식 이스케이프
//! - [`display_terminal`] - 서버 시작 배너 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::escape_regex;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let pattern = escape_regex("c++");   // "c\\+\\+"
//! print_boxed_title("ENROLLMENT SERVICE");
//! ```

pub mod string_utils;
pub mod display_terminal;
