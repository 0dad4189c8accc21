//! 사용자 등록 요청 DTO 및 형식 검증
//!
//! 생성 요청 본문이자, 수정 후 병합된 레코드를 다시 검증할 때 쓰는 형식입니다.
//! `validator` derive로 필드 규칙을 선언하며, 위반 사항은 단락 평가 없이 모두 수집됩니다.
//!
//! ## 필드 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `cpf` | 공백 불가, 최대 11자 | `must not be blank`, `size must be between 0 and 11` |
//! | `firstName` | 공백 불가, 최대 100자 | `must not be blank`, `size must be between 0 and 100` |
//! | `lastName` | 공백 불가, 최대 100자 | `must not be blank`, `size must be between 0 and 100` |
//! | `dateOfBirth` | 필수 | `must not be null` |
//! | `email` | 이메일 형식(빈 값 허용), 최대 50자 | `must be a well-formed email address`, `size must be between 0 and 50` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::is_valid_email;
use crate::domain::entities::users::User;
use crate::utils::string_utils::{is_blank, to_camel_case};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 11, message = "size must be between 0 and 11")
    )]
    pub cpf: String,

    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "size must be between 0 and 100")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "size must be between 0 and 100")
    )]
    pub last_name: String,

    #[validate(required(message = "must not be null"))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(
        custom(function = "validate_email_format"),
        length(max = 50, message = "size must be between 0 and 50")
    )]
    pub email: Option<String>,
}

impl UserDto {
    /// 모든 필드 규칙을 검사하고 `"field: message"` 목록을 반환합니다.
    ///
    /// 위반이 없으면 빈 목록입니다. 출력 순서는 필드명, 메시지 순으로 정렬됩니다.
    pub fn violations(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => format_violations(&errors),
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            cpf: user.cpf.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            date_of_birth: Some(user.date_of_birth),
            email: user.email.clone(),
        }
    }
}

/// validator 에러를 `"camelCaseField: message"` 문자열로 변환
pub fn format_violations(errors: &ValidationErrors) -> Vec<String> {
    let mut violations: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let property = to_camel_case(field.as_ref());
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", property, message)
            })
        })
        .collect();

    violations.sort();
    violations
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("not_blank")
            .with_message("must not be blank".into()));
    }
    Ok(())
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new("email")
            .with_message("must be a well-formed email address".into()));
    }
    Ok(())
}
