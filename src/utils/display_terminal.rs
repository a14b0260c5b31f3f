//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 배너와 등록된 엔드포인트 목록을 보기 좋게 출력합니다.

const CONTENT_WIDTH: usize = 50;

/// 박스 형태의 제목 문자열을 만듭니다.
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!("╔{}╗\n║{:^width$}║\n╚{}╝", border, title, border, width = CONTENT_WIDTH)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
