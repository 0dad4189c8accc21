//! 사용자 부분 수정 요청 DTO
//!
//! `PUT /api/user/{cpf}` 본문입니다. 모든 필드는 선택이며, 요청에 없는 필드는
//! 저장된 값을 그대로 유지합니다.
//!
//! | 필드 | 타입 | 생략 | `null` | 값 |
//! |------|------|------|--------|-----|
//! | `firstName` | `Option<String>` | 유지 | 유지 | 덮어씀 |
//! | `lastName` | `Option<String>` | 유지 | 유지 | 덮어씀 |
//! | `dateOfBirth` | `Option<NaiveDate>` | 유지 | 유지 | 덮어씀 |
//! | `email` | `Patch<String>` | 유지 | 지움 | 덮어씀 |
//!
//! 본문의 `cpf`는 선언하지 않았으므로 역직렬화 시 버려집니다.
//! 식별자는 항상 경로 파라미터가 기준입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::models::Patch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,
}
