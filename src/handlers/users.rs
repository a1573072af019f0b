//! # User Controller
//!
//! 사용자 서비스 결과를 응답 봉투로 바꾸는 컨트롤러입니다.
//!
//! | 연산 | 성공 | 실패 |
//! |------|------|------|
//! | `handle_create` | 200 + `User` | 500 `Internal server error` |
//! | `handle_get_all` | 200 + `User[]` | 500 `Internal server error` |
//! | `handle_get_by_id` | 200 + `User` / 404 `User not found` | 500 `Internal server error` |

use std::sync::Arc;
use actix_web::http::StatusCode;
use crate::{
    domain::{
        dto::{users::request::CreateUserRequest, ApiResponse},
        entities::users::user::User,
    },
    handlers::response::{ResponseWrapper, USER_NOT_FOUND},
    services::users::UserService,
};

const CREATE_USER: ResponseWrapper = ResponseWrapper::new(StatusCode::OK, "Failed to create user");
const FETCH_USERS: ResponseWrapper = ResponseWrapper::new(StatusCode::OK, "Failed to fetch users");
const FETCH_USER: ResponseWrapper =
    ResponseWrapper::new(StatusCode::OK, "Failed to fetch user").rejection(USER_NOT_FOUND);

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// 사용자 생성
    ///
    /// 실패 상세는 `Failed to create user` error 로그에만 남고,
    /// 호출자는 일반 500 응답을 받습니다.
    pub async fn handle_create(&self, request: CreateUserRequest) -> ApiResponse<User> {
        CREATE_USER
            .wrap(self.user_service.create_user(request))
            .await
    }

    /// 전체 사용자 목록 (생성 순서)
    pub async fn handle_get_all(&self) -> ApiResponse<Vec<User>> {
        FETCH_USERS.wrap(self.user_service.find_all()).await
    }

    /// ID로 사용자 조회
    pub async fn handle_get_by_id(&self, id: &str) -> ApiResponse<User> {
        FETCH_USER
            .wrap_optional(self.user_service.find_by_id(id))
            .await
    }
}
