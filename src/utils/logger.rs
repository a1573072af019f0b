//! 콘솔 로거
//!
//! `log` 파사드의 구현체입니다. 한 줄에 하나의 레코드를 `[LEVEL] message` 형식으로 씁니다.
//!
//! | 레벨 | 출력 스트림 |
//! |------|-------------|
//! | `ERROR`, `WARN` | stderr |
//! | `INFO`, `DEBUG`, `TRACE` | stdout |
//!
//! 레벨 필터는 `env_logger`와 같은 필터 문법(`RUST_LOG`)을 `env_filter`로 해석합니다.
//!
//! ```rust,ignore
//! ConsoleLogger::init("info,user_auth_service::repositories=debug")?;
//! log::info!("Creating user: {}", name);   // stdout: [INFO] Creating user: Ann
//! log::error!("Login failed: {}", error);  // stderr: [ERROR] Login failed: ...
//! ```

use std::fmt;
use std::io::{self, Write};
use env_filter::{Builder, Filter};
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// 필터가 지정되지 않았을 때 사용하는 기본값
pub const DEFAULT_FILTER: &str = "info";

/// 로그 레코드가 기록되는 표준 스트림
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Error | Level::Warn => Stream::Stderr,
            Level::Info | Level::Debug | Level::Trace => Stream::Stdout,
        }
    }
}

/// `[LEVEL] message` 형식의 한 줄을 만듭니다.
pub fn format_line(level: Level, args: &fmt::Arguments<'_>) -> String {
    format!("[{}] {}", level, args)
}

/// 표준 스트림 두 개로 나누어 쓰는 로거
pub struct ConsoleLogger {
    filter: Filter,
}

impl ConsoleLogger {
    /// `env_logger` 필터 문법의 문자열로 로거를 만듭니다.
    pub fn new(filter_spec: &str) -> Self {
        let filter = Builder::new().parse(filter_spec).build();
        Self { filter }
    }

    /// 전역 로거로 설치합니다.
    ///
    /// 프로세스당 한 번만 성공합니다. 이미 설치된 경우 `SetLoggerError`를 반환합니다.
    pub fn init(filter_spec: &str) -> Result<(), SetLoggerError> {
        let logger = Self::new(filter_spec);
        let max_level = logger.filter.filter();

        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.filter.matches(record) {
            return;
        }

        let line = format_line(record.level(), record.args());
        // 쓰기 실패는 무시 (닫힌 파이프 등)
        let _ = match Stream::for_level(record.level()) {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
