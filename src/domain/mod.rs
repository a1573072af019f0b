//! # Domain Layer
//!
//! 엔티티, DTO, 도메인 모델을 모아 둔 도메인 계층입니다.
//!
//! - [`entities`] - 저장소에 보관되는 엔티티 (`User`)
//! - [`dto`] - 요청/응답 데이터 전송 객체와 응답 봉투
//! - [`models`] - 저장되지 않는 도메인 개념 (`AccessToken`)

pub mod entities;
pub mod dto;
pub mod models;
