//! # Data Transfer Objects
//!
//! 컨트롤러 경계를 오가는 값 객체들입니다.
//! 요청 DTO는 즉시 소비되어 엔티티로 변환되고, 응답 DTO는 응답 봉투(envelope)의
//! `data` 필드에 실립니다.
//!
//! ## 모듈 구성
//!
//! - [`api_response`] - 모든 컨트롤러가 반환하는 `{status, data|error}` 봉투
//! - [`users`] - 사용자 생성 요청
//! - [`tokens`] - 로그인/토큰 검증 응답 페이로드

pub mod api_response;
pub mod users;
pub mod tokens;

pub use api_response::ApiResponse;
