//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 식별자가 없는 일회성 값이며, `UserService::create_user`에서 곧바로
/// [`User`](crate::domain::entities::users::User)로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// 표시 이름
    pub name: String,
    /// 이메일 주소 (로그인 조회 키)
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
