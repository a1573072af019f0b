//! # Configuration Module
//!
//! 데모 바이너리의 실행 설정을 관리합니다.
//! 서비스 코어(저장소, 서비스, 컨트롤러)는 설정값을 읽지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 프로파일 (dev | test | prod), 기본값 dev
//! export PROFILE="dev"
//!
//! # 로그 필터 (env_logger와 같은 필터 문법), 기본값은 프로파일별로 다름
//! export RUST_LOG="info,user_auth_service::repositories=debug"
//! ```
//!
//! 기본 `.env`가 먼저 로드되고, 그 뒤에 결정된 프로파일의
//! `.env.dev` / `.env.test` / `.env.prod` 파일이 있으면 로드됩니다.
//! 로그 필터는 이렇게 한 번 결정된 프로파일로 계산합니다.

pub mod data_config;

pub use data_config::*;
