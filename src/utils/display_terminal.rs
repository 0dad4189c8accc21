//! # 터미널 출력 유틸리티
//!
//! 서비스 시작 시 설정 요약을 터미널에 출력하는 함수들입니다.

/// 박스 형태의 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 시작 시 주요 설정을 요약해서 출력합니다.
pub fn print_startup_summary(bind_address: &str, entries: &[(&str, String)]) {
    println!();
    print_boxed_title("USER CONTROL SERVICE");
    print_sub_task("Listening", &format!("http://{}", bind_address));
    for (name, value) in entries {
        print_sub_task(name, value);
    }
    println!();
}
