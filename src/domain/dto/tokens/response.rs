use serde::{Deserialize, Serialize};

/// 로그인 성공 시 `data`에 실리는 페이로드: `{ "token": "token_<id>" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// 토큰 검증 결과 페이로드: `{ "valid": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidationResponse {
    pub valid: bool,
}
