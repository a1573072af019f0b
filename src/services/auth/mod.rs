//! 인증 서비스 모듈
//!
//! 이메일 조회 기반 로그인과 접두사 기반 토큰 검증을 제공합니다.
//! 비밀번호 검증, 서명, 만료는 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::new(Arc::clone(&user_service));
//! let token = auth_service.login("ann@x.com", "anything").await?;
//! let valid = auth_service.validate_token("token_abc").await?;
//! ```

pub mod auth_service;

pub use auth_service::AuthService;
