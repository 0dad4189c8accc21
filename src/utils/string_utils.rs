//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 공백만 있거나 비어 있는 문자열인지 확인
///
/// # 예제
/// ```rust,ignore
/// assert!(is_blank("   "));
/// assert!(!is_blank(" Ann "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 빈 문자열을 None으로 정규화
///
/// 이메일처럼 "빈 값 = 값 없음"으로 취급하는 선택 필드에 사용합니다.
/// 공백은 제거하지 않습니다. `" "`는 그대로 남아 형식 검증에서 걸러집니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(empty_to_none(Some("".to_string())), None);
/// assert_eq!(empty_to_none(Some("a@b.com".to_string())), Some("a@b.com".to_string()));
/// ```
pub fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// snake_case 필드명을 camelCase로 변환
///
/// 검증 에러의 필드명을 JSON 속성명과 맞추는 데 사용합니다.
/// 이미 camelCase인 입력은 그대로 반환합니다.
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("Ann"));
        assert!(!is_blank("  Lee  "));
    }

    #[test]
    fn test_empty_to_none() {
        assert_eq!(empty_to_none(Some("".to_string())), None);
        assert_eq!(empty_to_none(None), None);
        assert_eq!(
            empty_to_none(Some("email@fake.com".to_string())),
            Some("email@fake.com".to_string())
        );
        assert_eq!(empty_to_none(Some(" ".to_string())), Some(" ".to_string()));
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("date_of_birth"), "dateOfBirth");
        assert_eq!(to_camel_case("cpf"), "cpf");
        assert_eq!(to_camel_case("lastName"), "lastName");
        assert_eq!(to_camel_case("__schema"), "schema");
    }
}
