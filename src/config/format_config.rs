//! 직렬화 형식과 입력 패턴 설정
//!
//! JSON 날짜/시각 형식과 이메일 정규식을 한 곳에서 관리합니다.
//!
//! | 항목 | 형식 |
//! |------|------|
//! | 날짜 (`dateOfBirth`) | `yyyy-MM-dd` |
//! | 시각 (`registrationDate`) | `yyyy-MM-dd'T'HH:mm:ss'Z'` (UTC) |

use once_cell::sync::Lazy;
use regex::Regex;

/// 날짜 형식 (chrono strftime)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 등록 시각 형식 (chrono strftime)
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 이메일 정규식 원문
///
/// 빈 문자열도 유효한 값으로 허용합니다.
pub const EMAIL_REGEXP_FORMAT: &str = r"(^$|^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.(?:[a-zA-Z]{2}|com|org|net|edu|gov|mil|biz|info|mobi|name|aero|asia|jobs|museum)$)";

/// 대소문자 구분 없는 이메일 정규식
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", EMAIL_REGEXP_FORMAT)).expect("email pattern must compile")
});

/// 이메일 형식 검사
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
