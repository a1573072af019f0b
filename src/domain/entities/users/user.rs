//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 생성 이후에는 어떤 필드도 변경되지 않으며, 저장소에는 추가와 조회만 존재합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::dto::users::request::CreateUserRequest;

/// 사용자 엔티티
///
/// 등록된 사용자 한 명을 표현합니다. 직렬화 형태는
/// `{ "id", "name", "email", "createdAt" }` 입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 생성 시 발급되는 불투명 식별자 (UUID v4 문자열)
    pub id: String,
    /// 표시 이름 (검증 없음)
    pub name: String,
    /// 로그인 조회 키. 중복이 허용됩니다
    pub email: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 새 식별자와 현재 시각을 부여합니다. 식별자는 내용과 무관하므로
    /// 같은 이름/이메일로 두 번 생성해도 서로 다른 사용자가 됩니다.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            created_at: Utc::now(),
        }
    }

    /// 이메일 일치 여부 확인 (대소문자 구분)
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        Self::new(request.name, request.email)
    }
}
