//! # 사용자 관리 서비스 구현
//!
//! 프로세스 안에서 사용자 레코드의 유일한 출처입니다.
//! 주입받은 [`UserRepository`]를 단독으로 소유하며, 사용자 생성과 조회만 제공합니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │          UserService         │
//! │ • create_user (append)       │
//! │ • find_by_id  (scan)         │
//! │ • find_all    (snapshot)     │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │        UserRepository        │
//! │ • InMemoryUserRepository     │
//! └──────────────────────────────┘
//! ```

use std::sync::Arc;
use crate::{
    core::errors::AppResult,
    domain::{
        dto::users::request::CreateUserRequest,
        entities::users::user::User,
    },
    repositories::users::UserRepository,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 입력 검증과 이메일 중복 검사를 하지 않습니다. 같은 이메일로 여러 사용자를
/// 만들 수 있으며, 그 경우 로그인은 먼저 생성된 사용자를 찾습니다.
pub struct UserService {
    /// 사용자 저장소. 이 서비스 인스턴스만 소유합니다.
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// 새 ID와 현재 시각으로 사용자를 만들어 목록 끝에 추가하고 반환합니다.
    /// `Creating user: <name>` info 로그를 남깁니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자
    /// * `Err(AppError::StoreError)` - 저장소를 사용할 수 없는 경우
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        log::info!("Creating user: {}", request.name);

        let user = User::from(request);
        self.user_repo.insert(user).await
    }

    /// ID로 사용자 조회
    ///
    /// 일치하는 사용자가 없으면 `Ok(None)`을 반환합니다. 에러가 아닙니다.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    /// 전체 사용자 조회 (삽입 순서, 불변 스냅샷)
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// 저장된 사용자 수
    pub async fn count(&self) -> AppResult<usize> {
        self.user_repo.count().await
    }

    /// 주입된 저장소 이름
    pub fn repository_name(&self) -> &str {
        self.user_repo.name()
    }
}
