//! 컨트롤러 공통 응답 래퍼
//!
//! 모든 컨트롤러 연산은 같은 규칙으로 응답 봉투를 만듭니다.
//!
//! | 연산 결과 | 응답 |
//! |-----------|------|
//! | `Ok(value)` / `Ok(Some(value))` | 성공 상태 코드 + `data` |
//! | `Ok(None)` | 도메인 거절 상태 코드 + 거절 메시지 (실패 아님) |
//! | `Err(AppError)` 또는 패닉 | 상세를 error 로그로 남기고 500 `Internal server error` |
//!
//! ```rust,ignore
//! ResponseWrapper::new(StatusCode::OK, "Login failed")
//!     .rejection(INVALID_CREDENTIALS)
//!     .wrap_optional(async { self.auth_service.login(email, password).await })
//!     .await
//! ```

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use actix_web::http::StatusCode;
use futures_util::FutureExt;
use crate::{
    core::errors::AppResult,
    domain::dto::ApiResponse,
};

/// 도메인 거절 응답 (일치하는 레코드 없음 등)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub status: StatusCode,
    pub message: &'static str,
}

impl Rejection {
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn into_response<T>(self) -> ApiResponse<T> {
        ApiResponse::error(self.status, self.message)
    }
}

/// 로그인 대상 이메일이 없을 때
pub const INVALID_CREDENTIALS: Rejection =
    Rejection::new(StatusCode::UNAUTHORIZED, "Invalid credentials");

/// ID로 찾는 사용자가 없을 때
pub const USER_NOT_FOUND: Rejection = Rejection::new(StatusCode::NOT_FOUND, "User not found");

/// 기본 거절 응답
pub const NOT_FOUND: Rejection = Rejection::new(StatusCode::NOT_FOUND, "Not found");

/// 연산 결과를 응답 봉투로 바꾸는 래퍼
///
/// 실패 시 남길 로그 메시지, 성공 상태 코드, 거절 응답으로 매개변수화됩니다.
#[derive(Debug, Clone, Copy)]
pub struct ResponseWrapper {
    failure_message: &'static str,
    success_status: StatusCode,
    rejection: Rejection,
}

impl ResponseWrapper {
    /// 거절 응답은 404 `Not found`가 기본값입니다.
    pub const fn new(success_status: StatusCode, failure_message: &'static str) -> Self {
        Self {
            failure_message,
            success_status,
            rejection: NOT_FOUND,
        }
    }

    pub const fn rejection(mut self, rejection: Rejection) -> Self {
        self.rejection = rejection;
        self
    }

    /// 항상 값을 내는 연산을 감쌉니다.
    pub async fn wrap<T, F>(&self, operation: F) -> ApiResponse<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match self.settle(operation).await {
            Some(data) => ApiResponse::with_status(self.success_status, data),
            None => ApiResponse::internal_error(),
        }
    }

    /// 값이 없을 수 있는 연산을 감쌉니다. `None`은 거절 응답이 됩니다.
    pub async fn wrap_optional<T, F>(&self, operation: F) -> ApiResponse<T>
    where
        F: Future<Output = AppResult<Option<T>>>,
    {
        match self.settle(operation).await {
            Some(Some(data)) => ApiResponse::with_status(self.success_status, data),
            Some(None) => self.rejection.into_response(),
            None => ApiResponse::internal_error(),
        }
    }

    /// 연산을 실행하고, 에러나 패닉이면 로그를 남기고 `None`을 반환합니다.
    async fn settle<T, F>(&self, operation: F) -> Option<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match AssertUnwindSafe(operation).catch_unwind().await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                log::error!("{}: {}", self.failure_message, error);
                None
            }
            Err(payload) => {
                log::error!("{}: panic: {}", self.failure_message, panic_detail(payload.as_ref()));
                None
            }
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::utils::logger::{capture, Stream};

    const WRAPPER: ResponseWrapper = ResponseWrapper::new(StatusCode::OK, "Operation failed");

    async fn explode() -> AppResult<u8> {
        panic!("boom")
    }

    #[actix_web::test]
    async fn test_wrap_success() {
        let response = WRAPPER.wrap(async { Ok::<_, AppError>(7) }).await;

        assert_eq!(response, ApiResponse::with_status(StatusCode::OK, 7));
    }

    #[actix_web::test]
    async fn test_wrap_custom_success_status() {
        let response = ResponseWrapper::new(StatusCode::CREATED, "Operation failed")
            .wrap(async { Ok::<_, AppError>("made") })
            .await;

        assert_eq!(response.status, 201);
        assert_eq!(response.data, Some("made"));
    }

    #[actix_web::test]
    async fn test_wrap_error_hides_detail() {
        let response: ApiResponse<u8> = WRAPPER
            .wrap(async { Err::<u8, _>(AppError::StoreError("secret detail".to_string())) })
            .await;

        assert_eq!(response.status, 500);
        assert_eq!(response.error.as_deref(), Some("Internal server error"));
        assert!(response.data.is_none());
    }

    #[actix_web::test]
    async fn test_wrap_catches_panics() {
        let response = WRAPPER.wrap(explode()).await;

        assert_eq!(response, ApiResponse::internal_error());
    }

    #[actix_web::test]
    async fn test_wrap_optional_rejection_is_not_failure() {
        let response: ApiResponse<u8> = WRAPPER
            .rejection(INVALID_CREDENTIALS)
            .wrap_optional(async { Ok::<Option<u8>, AppError>(None) })
            .await;

        assert_eq!(response.status, 401);
        assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
    }

    #[actix_web::test]
    async fn test_wrap_optional_default_rejection() {
        let response: ApiResponse<u8> = WRAPPER
            .wrap_optional(async { Ok::<Option<u8>, AppError>(None) })
            .await;

        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_panic_detail_extracts_messages() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_detail(owned.as_ref()), "owned");
        assert_eq!(panic_detail(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_detail(other.as_ref()), "unknown panic");
    }

    #[actix_web::test]
    async fn test_failure_log_line_keeps_detail() {
        capture::install();

        let _: ApiResponse<u8> = ResponseWrapper::new(StatusCode::OK, "Failed to save widget")
            .wrap(async { Err::<u8, _>(AppError::StoreError("widget shelf locked".to_string())) })
            .await;

        assert_eq!(
            capture::lines_containing("widget shelf locked"),
            vec![(
                Stream::Stderr,
                "[ERROR] Failed to save widget: Store error: widget shelf locked".to_string()
            )]
        );
    }

    #[actix_web::test]
    async fn test_panic_log_line_keeps_detail() {
        capture::install();

        let _ = ResponseWrapper::new(StatusCode::OK, "Failed to spin widget")
            .wrap(explode())
            .await;

        assert_eq!(
            capture::lines_containing("Failed to spin widget"),
            vec![(Stream::Stderr, "[ERROR] Failed to spin widget: panic: boom".to_string())]
        );
    }
}
