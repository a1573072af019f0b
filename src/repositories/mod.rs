//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 trait 객체로 서비스에 주입됩니다. 기본 구현은 프로세스 수명 동안만
//! 유지되는 인메모리 목록입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::InMemoryUserRepository;
//!
//! let user_repo = InMemoryUserRepository::new();
//! let user = user_repo.find_by_id("6f1c...").await?;
//! ```

pub mod users;
