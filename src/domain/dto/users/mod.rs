//! 사용자 관련 DTO 모듈
//!
//! 사용자 생성 요청 DTO를 제공합니다. 응답에는 별도 DTO 없이
//! [`User`](crate::domain::entities::users::User) 엔티티가 그대로 직렬화됩니다.

pub mod request;
