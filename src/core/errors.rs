//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현합니다.
//!
//! ## 에러가 경계에 도달하는 방식
//!
//! 컨트롤러 경계에서 만나는 결과는 두 종류뿐입니다.
//!
//! 1. **실패하지 않은 부정 결과**: 연산은 정상 수행되었지만 일치하는 사용자가 없는 경우.
//!    에러가 아니라 `Option::None`으로 전달되고, 컨트롤러의 `Rejection`이
//!    401/404 같은 상태로 응답합니다.
//! 2. **예상치 못한 실패**: 이 모듈의 `AppError` 또는 패닉.
//!    항상 상세 내용과 함께 로그에 남고, 호출자에게는 일반적인 500 응답만 전달됩니다.
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! let users = self.users.read()
//!     .map_err(|e| AppError::StoreError(e.to_string()))?;
//!
//! ConsoleLogger::init(&filter).context("로거 설치 실패")?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 컨트롤러 경계에서는 종류와 관계없이 모두 "예상치 못한 실패"로 취급됩니다.
/// 변형은 로그에 남는 상세 내용을 구분하기 위해 존재합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 저장소 관련 에러
    ///
    /// 인메모리 저장소의 락이 오염(poisoned)된 경우처럼
    /// 저장소 연산 자체가 수행될 수 없을 때 발생합니다.
    #[error("Store error: {0}")]
    StoreError(String),

    /// 내부 서버 에러
    ///
    /// 다른 분류에 속하지 않는 모든 실패. `ErrorContext`로 변환된
    /// 외부 에러가 여기에 해당합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_keeps_detail() {
        let error = AppError::StoreError("lock poisoned".to_string());

        assert_eq!(error.to_string(), "Store error: lock poisoned");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_context_passes_ok_through() {
        let ok: Result<u8, &str> = Ok(1);

        assert_eq!(ok.context("unused").unwrap(), 1);
    }
}
