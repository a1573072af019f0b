//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자 주입으로 연결됩니다. 의존 방향은 단방향입니다.
//!
//! ```text
//! AuthService ──▶ UserService ──▶ UserRepository
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::AuthService};
//!
//! let user_service = Arc::new(UserService::new(repo));
//! let auth_service = AuthService::new(Arc::clone(&user_service));
//! ```

pub mod users;
pub mod auth;
