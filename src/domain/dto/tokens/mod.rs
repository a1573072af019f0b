//! 인증 관련 응답 DTO 모듈

pub mod response;

pub use response::{TokenResponse, TokenValidationResponse};
