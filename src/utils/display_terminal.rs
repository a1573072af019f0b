//! 터미널 출력 포맷팅 유틸리티
//!
//! 데모 실행 과정에서 사용하는 터미널 출력 함수들입니다.
//! 로그와 섞이지 않도록 결과 출력은 항상 stdout으로 직접 씁니다.

use serde::Serialize;

const CONTENT_WIDTH: usize = 50;

/// 박스 제목의 세 줄을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              user_auth_service demo              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let border = "═".repeat(CONTENT_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = CONTENT_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: create user
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 응답 봉투를 들여쓴 JSON으로 출력합니다
///
/// 직렬화에 실패하면 에러 메시지를 대신 출력합니다.
pub fn print_envelope<T: Serialize>(envelope: &T) {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => {
            for line in json.lines() {
                println!("   {}", line);
            }
        }
        Err(e) => println!("   <직렬화 실패: {}>", e),
    }
}

/// 최종 요약을 출력합니다
pub fn print_final_summary(steps: u8, users: usize) {
    println!();
    println!("✅ {}개 단계 완료, 저장된 사용자 {}명", steps, users);
}
