//! 응답 봉투 (Envelope)
//!
//! 모든 컨트롤러 연산은 `{status, data}` 또는 `{status, error}` 형태의
//! [`ApiResponse`]를 반환합니다. 없는 필드는 JSON에서 생략됩니다.
//!
//! ```json
//! { "status": 200, "data": { "token": "token_6f1c..." } }
//! { "status": 401, "error": "Invalid credentials" }
//! ```

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 호출자에게 실패 상세를 숨길 때 사용하는 일반 에러 메시지
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 컨트롤러 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 지정한 상태 코드의 성공 응답
    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            data: Some(data),
            error: None,
        }
    }

    /// 데이터 없이 에러 메시지만 담은 응답
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            data: None,
            error: Some(message.into()),
        }
    }

    /// 상세를 숨긴 500 응답
    pub fn internal_error() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_error_field() {
        let response = ApiResponse::with_status(StatusCode::OK, json!({ "valid": true }));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "status": 200, "data": { "valid": true } }));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_error_omits_data_field() {
        let response: ApiResponse<()> =
            ApiResponse::error(StatusCode::UNAUTHORIZED, "Invalid credentials");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "status": 401, "error": "Invalid credentials" }));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response: ApiResponse<String> = ApiResponse::internal_error();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(response.error.as_deref(), Some("Internal server error"));
        assert!(response.data.is_none());
    }
}
