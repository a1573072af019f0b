//! # Domain Models
//!
//! 저장소에 보관되지 않는 도메인 개념들입니다.

pub mod token;
