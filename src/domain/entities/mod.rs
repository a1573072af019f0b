//! # Domain Entities
//!
//! 서비스가 소유하는 도메인 엔티티 모듈입니다.
//! 엔티티는 저장소(`repositories`)에만 보관되며, 생성 이후에는 변경되지 않습니다.
//!
//! | 엔티티 | 소유자 | 생명주기 |
//! |--------|--------|----------|
//! | [`users::User`] | `UserService` (저장소를 통해) | 프로세스 종료까지, 삭제 없음 |

pub mod users;
