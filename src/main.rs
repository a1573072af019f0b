//! 사용자 인증 서비스 데모 실행기
//!
//! 컨테이너를 구성하고, 사용자 생성부터 토큰 검증까지의 시나리오를 실행하여
//! 각 응답 봉투를 JSON으로 출력합니다.

use log::{info, warn};
use user_auth_service::config::{EnvLoad, LoggingConfig};
use user_auth_service::core::{AppContainer, AppResult, ErrorContext};
use user_auth_service::domain::dto::users::request::CreateUserRequest;
use user_auth_service::utils::display_terminal::{
    print_boxed_title, print_envelope, print_final_summary, print_step_start,
};
use user_auth_service::utils::logger::ConsoleLogger;

#[actix_web::main]
async fn main() -> AppResult<()> {
    // 환경 설정 및 로깅 초기화
    let env_load = EnvLoad::load();
    let environment = env_load.environment;
    ConsoleLogger::init(&LoggingConfig::filter(&environment)).context("로거 설치 실패")?;

    info!("🚀 사용자 인증 서비스 데모 시작 (profile: {:?})", environment);
    if env_load.loaded.is_empty() {
        warn!("로드된 .env 파일 없음 ({} 없음)", environment.env_file());
    }
    for file in &env_load.loaded {
        info!("{} 파일 로드 됨", file);
    }

    let container = AppContainer::new();
    info!("✅ 컨테이너 구성 완료: {}", container.user_service.repository_name());

    run_demo(&container).await
}

/// 사용자 생성 → 목록 → 로그인 성공/실패 → 토큰 검증 시나리오
async fn run_demo(container: &AppContainer) -> AppResult<()> {
    print_boxed_title("user_auth_service demo");

    print_step_start(1, "create user Ann");
    let created = container
        .user_controller
        .handle_create(CreateUserRequest::new("Ann", "ann@x.com"))
        .await;
    print_envelope(&created);

    print_step_start(2, "list users");
    print_envelope(&container.user_controller.handle_get_all().await);

    print_step_start(3, "login as ann@x.com");
    let login = container
        .auth_controller
        .handle_login("ann@x.com", "anything")
        .await;
    print_envelope(&login);

    print_step_start(4, "login as bob@x.com");
    print_envelope(&container.auth_controller.handle_login("bob@x.com", "x").await);

    print_step_start(5, "validate issued token");
    let token = login
        .data
        .map(|data| data.token)
        .unwrap_or_default();
    print_envelope(&container.auth_controller.handle_validate(&token).await);

    print_step_start(6, "validate token that was never issued");
    print_envelope(&container.auth_controller.handle_validate("token_never-issued").await);

    print_step_start(7, "validate plain string");
    print_envelope(&container.auth_controller.handle_validate("abc").await);

    print_final_summary(7, container.user_service.count().await?);
    Ok(())
}
