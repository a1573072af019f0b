//! 인증 서비스 구현
//!
//! 실제 자격 증명 검사 없이 인증을 흉내 냅니다.
//! 로그인은 이메일이 일치하는 사용자가 있는지만 확인하고, 비밀번호는 보지 않습니다.
//! 토큰 검증은 접두사 확인뿐이며 발급 이력과 대조하지 않습니다.

use std::sync::Arc;
use crate::{
    core::errors::AppResult,
    domain::models::token::AccessToken,
    services::users::UserService,
};

/// 시뮬레이션 인증 서비스
///
/// 자체 상태는 없고, 사용자 조회를 위해 `UserService` 참조만 보유합니다.
pub struct AuthService {
    user_service: Arc<UserService>,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// 이메일로 로그인
    ///
    /// 전체 사용자 목록을 받아 이메일이 같은 첫 번째 사용자를 찾습니다.
    /// `password`는 받기만 하고 검사하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(AccessToken))` - `token_<userId>` 토큰
    /// * `Ok(None)` - 일치하는 사용자 없음 (에러 아님)
    /// * `Err(AppError)` - 사용자 조회 실패
    pub async fn login(&self, email: &str, _password: &str) -> AppResult<Option<AccessToken>> {
        log::info!("Login attempt for: {}", email);

        let users = self.user_service.find_all().await?;
        let token = users
            .iter()
            .find(|user| user.has_email(email))
            .map(|user| AccessToken::issue(&user.id));

        Ok(token)
    }

    /// 토큰 검증
    ///
    /// `token_` 접두사로 시작하면 `true`입니다. 발급된 적 없는 토큰도 통과합니다.
    pub async fn validate_token(&self, token: &str) -> AppResult<bool> {
        Ok(AccessToken::has_valid_prefix(token))
    }
}
