//! 실행 환경 및 로깅 설정 관리 모듈
//!
//! 라이브러리 자체에는 설정이 없습니다. 데모 바이너리가 실행 프로파일,
//! `.env` 파일, 로그 필터를 결정할 때만 사용합니다.

use std::env;
use crate::utils::logger::DEFAULT_FILTER;

/// 항상 먼저 로드되는 기본 `.env` 파일
pub const BASE_ENV_FILE: &str = ".env";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그
    Development,
    /// 테스트 환경 - 경고 이상만 출력
    Test,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `PROFILE` 값에서 환경을 결정합니다. 값이 없으면 `dev`입니다.
    pub fn from_profile(profile: Option<String>) -> Self {
        Self::from_str(profile.as_deref().unwrap_or("dev"))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// 이 환경에서 로드할 `.env` 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env.dev",
            Environment::Test => ".env.test",
            Environment::Production => ".env.prod",
        }
    }
}

/// `.env` 파일 로드 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLoad {
    /// 기본 `.env`를 로드한 뒤 한 번만 결정된 실행 환경
    pub environment: Environment,
    /// 실제로 로드된 파일 (로드 순서대로)
    pub loaded: Vec<&'static str>,
}

impl EnvLoad {
    /// 기본 `.env`와 프로파일 `.env` 파일을 로드합니다.
    ///
    /// 로거 설치 전에 호출되므로 로그를 남기지 않고 결과만 반환합니다.
    pub fn load() -> Self {
        Self::load_with(
            |file| dotenv::from_filename(file).is_ok(),
            || env::var("PROFILE").ok(),
        )
    }

    /// 파일 로더와 `PROFILE` 조회를 주입받아 로드 순서를 실행합니다.
    ///
    /// 1. 기본 `.env` 로드 (여기서 `PROFILE`이 설정될 수 있음)
    /// 2. `PROFILE`로 환경 결정
    /// 3. 해당 환경의 `.env.<profile>` 로드
    ///
    /// 먼저 설정된 값이 우선하므로 프로파일 파일은 기본 파일의 값을 덮어쓰지 않습니다.
    pub fn load_with<L, P>(mut load_file: L, read_profile: P) -> Self
    where
        L: FnMut(&'static str) -> bool,
        P: Fn() -> Option<String>,
    {
        let mut loaded = Vec::new();
        if load_file(BASE_ENV_FILE) {
            loaded.push(BASE_ENV_FILE);
        }

        let environment = Environment::from_profile(read_profile());
        let profile_file = environment.env_file();
        if load_file(profile_file) {
            loaded.push(profile_file);
        }

        Self { environment, loaded }
    }
}

/// 로그 필터 설정
pub struct LoggingConfig;

impl LoggingConfig {
    /// 주어진 환경의 로그 필터를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `RUST_LOG`: 설정되어 있으면 그대로 사용
    pub fn filter(environment: &Environment) -> String {
        Self::filter_for(environment, env::var("RUST_LOG").ok())
    }

    /// 환경과 `RUST_LOG` 값으로 필터를 결정합니다.
    ///
    /// 비어 있는 `RUST_LOG`는 설정되지 않은 것으로 봅니다.
    pub fn filter_for(env: &Environment, rust_log: Option<String>) -> String {
        match rust_log {
            Some(filter) if !filter.trim().is_empty() => filter,
            _ => Self::default_filter_for_env(env).to_string(),
        }
    }

    /// 환경별 기본 필터
    ///
    /// - Development: `debug`
    /// - Test: `warn`
    /// - Production: `info`
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => DEFAULT_FILTER,
        }
    }
}
