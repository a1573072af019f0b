//! 테스트 전용 저장소 구현
//!
//! 컨트롤러의 500 경로를 재현하기 위해 항상 실패하거나 패닉을 일으키는 저장소입니다.

use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
};
use super::UserRepository;

/// 모든 연산이 `StoreError`를 반환하는 저장소
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    fn name(&self) -> &str {
        "failing_user_repository"
    }

    async fn insert(&self, _user: User) -> AppResult<User> {
        Err(AppError::StoreError("insert rejected".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
        Err(AppError::StoreError("lookup rejected".to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Err(AppError::StoreError("scan rejected".to_string()))
    }

    async fn count(&self) -> AppResult<usize> {
        Err(AppError::StoreError("count rejected".to_string()))
    }
}

/// 모든 연산이 패닉을 일으키는 저장소
pub struct PanickingUserRepository;

#[async_trait]
impl UserRepository for PanickingUserRepository {
    fn name(&self) -> &str {
        "panicking_user_repository"
    }

    async fn insert(&self, _user: User) -> AppResult<User> {
        panic!("insert exploded")
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
        panic!("lookup exploded")
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        panic!("scan exploded")
    }

    async fn count(&self) -> AppResult<usize> {
        panic!("count exploded")
    }
}
