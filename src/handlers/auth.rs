//! # Auth Controller
//!
//! 인증 서비스 결과를 응답 봉투로 바꾸는 컨트롤러입니다.
//! 로그인 대상이 없는 경우(401)는 정상적인 부정 결과이며, 500 실패 경로와 구분됩니다.

use std::sync::Arc;
use actix_web::http::StatusCode;
use crate::{
    core::errors::AppError,
    domain::dto::{
        tokens::{TokenResponse, TokenValidationResponse},
        ApiResponse,
    },
    handlers::response::{ResponseWrapper, INVALID_CREDENTIALS},
    services::auth::AuthService,
};

const LOGIN: ResponseWrapper =
    ResponseWrapper::new(StatusCode::OK, "Login failed").rejection(INVALID_CREDENTIALS);
const VALIDATE_TOKEN: ResponseWrapper = ResponseWrapper::new(StatusCode::OK, "Token validation failed");

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// 로그인
    ///
    /// * 200 `{ "token": "token_<id>" }` - 이메일이 일치하는 사용자가 있음
    /// * 401 `Invalid credentials` - 일치하는 사용자 없음
    /// * 500 `Internal server error` - 조회 중 실패 (`Login failed` 로그)
    pub async fn handle_login(&self, email: &str, password: &str) -> ApiResponse<TokenResponse> {
        LOGIN
            .wrap_optional(async {
                let token = self.auth_service.login(email, password).await?;
                Ok::<_, AppError>(token.map(|token| TokenResponse { token: token.into_string() }))
            })
            .await
    }

    /// 토큰 검증. 성공 시 항상 200 `{ "valid": bool }`
    pub async fn handle_validate(&self, token: &str) -> ApiResponse<TokenValidationResponse> {
        VALIDATE_TOKEN
            .wrap(async {
                let valid = self.auth_service.validate_token(token).await?;
                Ok::<_, AppError>(TokenValidationResponse { valid })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::CreateUserRequest;
    use crate::repositories::users::{InMemoryUserRepository, UserRepository};
    use crate::repositories::users::test_doubles::FailingUserRepository;
    use crate::services::users::UserService;

    fn build(repo: Arc<dyn UserRepository>) -> (Arc<UserService>, AuthController) {
        let users = Arc::new(UserService::new(repo));
        let auth = Arc::new(AuthService::new(Arc::clone(&users)));
        (users, AuthController::new(auth))
    }

    #[actix_web::test]
    async fn test_handle_login_success() {
        let (users, controller) = build(Arc::new(InMemoryUserRepository::new()));
        let ann = users.create_user(CreateUserRequest::new("Ann", "ann@x.com")).await.unwrap();

        let response = controller.handle_login("ann@x.com", "anything").await;
        assert_eq!(
            response,
            ApiResponse::with_status(StatusCode::OK, TokenResponse { token: format!("token_{}", ann.id) })
        );
    }

    #[actix_web::test]
    async fn test_handle_login_unknown_email_is_401() {
        let (_, controller) = build(Arc::new(InMemoryUserRepository::new()));

        let response = controller.handle_login("bob@x.com", "x").await;
        assert_eq!(response.status, 401);
        assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
        assert!(response.data.is_none());
    }

    #[actix_web::test]
    async fn test_handle_login_store_failure_is_500() {
        let (_, controller) = build(Arc::new(FailingUserRepository));

        let response = controller.handle_login("ann@x.com", "x").await;
        assert_eq!(response, ApiResponse::internal_error());
    }

    #[actix_web::test]
    async fn test_handle_validate() {
        let (_, controller) = build(Arc::new(InMemoryUserRepository::new()));

        let valid = controller.handle_validate("token_abc").await;
        assert_eq!(valid, ApiResponse::with_status(StatusCode::OK, TokenValidationResponse { valid: true }));

        let invalid = controller.handle_validate("abc").await;
        assert_eq!(invalid, ApiResponse::with_status(StatusCode::OK, TokenValidationResponse { valid: false }));
    }

    #[actix_web::test]
    async fn test_handle_validate_does_not_need_store() {
        let (_, controller) = build(Arc::new(FailingUserRepository));

        let response = controller.handle_validate("token_never_issued").await;
        assert_eq!(response.status, 200);
        assert_eq!(response.data, Some(TokenValidationResponse { valid: true }));
    }
}
