//! 사용자 등록 및 시뮬레이션 토큰 인증 서비스
//!
//! 프로세스 안에서 호출하는 사용자 등록/로그인 서비스입니다.
//! 네트워크 계층과 영구 저장소가 없으며, 인증은 이메일이 일치하는 사용자가
//! 있는지만 확인하고 `token_<userId>` 형태의 문자열 토큰을 발급합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 사용자 생성, ID 조회, 전체 목록 (삽입 순서)
//! - **시뮬레이션 인증**: 이메일 기반 로그인, 접두사 기반 토큰 검증
//! - **응답 봉투**: 모든 컨트롤러 연산이 `{status, data|error}` 반환
//! - **명시적 DI**: 전역 상태 없이 `AppContainer`에서 생성자 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Controllers   │ ← 응답 봉투 생성, 실패 → 500
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService → UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 사용자 목록
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_auth_service::core::AppContainer;
//! use user_auth_service::domain::dto::users::request::CreateUserRequest;
//!
//! let container = AppContainer::new();
//! container.user_controller.handle_create(CreateUserRequest::new("Ann", "ann@x.com")).await;
//!
//! let login = container.auth_controller.handle_login("ann@x.com", "anything").await;
//! assert_eq!(login.status, 200);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod handlers;
pub mod utils;
