//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성과 조회를 담당하는 [`UserService`](user_service::UserService)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = user_service.create_user(CreateUserRequest::new("Ann", "ann@x.com")).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
