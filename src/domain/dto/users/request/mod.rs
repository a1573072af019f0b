//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 입력을 구조화된 Rust 타입으로 받기 위한 요청 DTO입니다.
//! 입력 검증은 수행하지 않습니다. 이름과 이메일은 받은 그대로 저장됩니다.

pub mod create_user_request;

pub use create_user_request::CreateUserRequest;
