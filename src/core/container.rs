//! # Application Container
//!
//! 저장소, 서비스, 컨트롤러를 생성자 주입으로 연결하는 조립 지점입니다.
//! 전역 싱글톤을 두지 않으므로 컨테이너마다 독립된 사용자 저장소를 갖습니다.
//!
//! ```text
//! InMemoryUserRepository
//!        │ (단독 소유)
//!        ▼
//!   UserService ◀──────── AuthService
//!        │                     │
//!        ▼                     ▼
//!  UserController        AuthController
//! ```
//!
//! ```rust,ignore
//! let container = AppContainer::new();
//! let created = container.user_controller
//!     .handle_create(CreateUserRequest::new("Ann", "ann@x.com"))
//!     .await;
//! ```

use std::sync::Arc;
use crate::{
    handlers::{AuthController, UserController},
    repositories::users::{InMemoryUserRepository, UserRepository},
    services::{auth::AuthService, users::UserService},
};

/// 연결이 끝난 컴포넌트 묶음
pub struct AppContainer {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub user_controller: Arc<UserController>,
    pub auth_controller: Arc<AuthController>,
}

impl AppContainer {
    /// 새 인메모리 저장소로 컨테이너를 구성합니다.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }

    /// 주어진 저장소로 컨테이너를 구성합니다.
    ///
    /// 저장소는 `UserService` 하나에만 전달됩니다.
    pub fn with_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        log::debug!("컨테이너 구성: 저장소 = {}", user_repo.name());

        let user_service = Arc::new(UserService::new(user_repo));
        let auth_service = Arc::new(AuthService::new(Arc::clone(&user_service)));
        let user_controller = Arc::new(UserController::new(Arc::clone(&user_service)));
        let auth_controller = Arc::new(AuthController::new(Arc::clone(&auth_service)));

        Self {
            user_service,
            auth_service,
            user_controller,
            auth_controller,
        }
    }
}

impl Default for AppContainer {
    fn default() -> Self {
        Self::new()
    }
}
