//! # Core Module
//!
//! 서비스 전반에서 쓰는 핵심 구성 요소입니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`
//! - [`container`] - 저장소/서비스/컨트롤러 조립 (`AppContainer`)

pub mod errors;
pub mod container;

pub use errors::*;
pub use container::*;
