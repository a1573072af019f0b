//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`logger`] - `[LEVEL] message` 형식의 콘솔 로거 (`log` 파사드 구현)
//! - [`display_terminal`] - 데모 실행 결과 출력 포맷팅

pub mod logger;
pub mod display_terminal;
