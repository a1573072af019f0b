//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 저장소는 프로세스 수명 동안만 유지되는 인메모리 목록이며, 삽입 순서를 보존합니다.
//!
//! ## 특징
//!
//! - **명시적 소유권**: 전역 목록 대신 저장소 객체 하나를 `UserService` 하나가 소유
//! - **추가 전용**: 삽입과 조회만 존재 (수정/삭제 없음)
//! - **스냅샷 조회**: `find_all`은 내부 목록의 복사본을 반환하여 외부 변경을 차단
//! - **쓰기 직렬화**: `RwLock`으로 동시 삽입 시에도 유실 없음

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
};

/// 사용자 저장소 인터페이스
///
/// `UserService`는 이 trait 객체를 주입받아 사용합니다.
/// 테스트에서는 실패하는 구현을 주입하여 500 경로를 검증할 수 있습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 리포지토리 이름 (로그 식별용)
    fn name(&self) -> &str;

    /// 사용자를 목록 끝에 추가하고, 저장된 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// ID로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우 (에러 아님)
    /// * `Err(AppError)` - 저장소 오류
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 삽입 순서대로 정렬된 전체 사용자 스냅샷
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 저장된 사용자 수
    async fn count(&self) -> AppResult<usize>;
}

/// 인메모리 사용자 리포지토리
///
/// 프로세스 수명 동안만 유지됩니다. 인스턴스마다 독립된 목록을 가지므로
/// 테스트 시나리오 간 상태가 공유되지 않습니다.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|e| AppError::StoreError(format!("사용자 목록 읽기 실패: {}", e)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|e| AppError::StoreError(format!("사용자 목록 쓰기 실패: {}", e)))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "in_memory_user_repository"
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        self.write()?.push(user.clone());
        log::debug!("사용자 저장 완료: {}", user.id);
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|user| user.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}
