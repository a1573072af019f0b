//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) trait과 기본 구현인
//! [`InMemoryUserRepository`](user_repo::InMemoryUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let users = repo.find_all().await?;
//! ```

pub mod user_repo;
#[cfg(test)]
pub(crate) mod test_doubles;

pub use user_repo::{InMemoryUserRepository, UserRepository};
