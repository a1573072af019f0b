//! # Controllers
//!
//! 서비스 호출 결과를 `{status, data|error}` 응답 봉투로 바꾸는 컨트롤러 계층입니다.
//! 네트워크 전송 계층은 없으며, 호출자는 컨트롤러 메서드를 직접 호출합니다.
//!
//! ```text
//! 호출자 ──▶ Controller ──▶ Service ──▶ (AuthService ──▶ UserService) ──▶ Repository
//!              │
//!              └─ ResponseWrapper: 성공 / 거절(401, 404) / 실패(500)
//! ```
//!
//! 각 컨트롤러 연산은 자신의 경계에서 실패를 잡습니다. 잡는 방식은
//! [`response::ResponseWrapper`] 하나로 통일되어 있습니다.

pub mod response;
pub mod users;
pub mod auth;

pub use auth::AuthController;
pub use users::UserController;
