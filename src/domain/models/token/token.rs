//! 시뮬레이션 액세스 토큰
//!
//! 토큰은 `token_<userId>` 형태의 문자열일 뿐입니다. 서명, 만료, 폐기가 없으며
//! 검증은 접두사 확인만 수행합니다. 발급 이력과 대조하지 않으므로
//! 발급된 적 없는 `token_...` 문자열도 유효한 것으로 판정됩니다.

use serde::{Deserialize, Serialize};

/// 모든 토큰이 시작하는 접두사
pub const TOKEN_PREFIX: &str = "token_";

/// 사용자에게 발급되는 액세스 토큰
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// 사용자 ID로 토큰을 발급합니다.
    pub fn issue(user_id: &str) -> Self {
        Self(format!("{}{}", TOKEN_PREFIX, user_id))
    }

    /// 접두사가 붙어 있는지만 확인합니다.
    pub fn has_valid_prefix(token: &str) -> bool {
        token.starts_with(TOKEN_PREFIX)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
