//! DTO ↔ 엔티티 변환
//!
//! 요청 DTO를 `User` 엔티티로 만들거나, 부분 수정 요청을 기존 엔티티에 병합합니다.
//! 병합은 재검증 전에 수행되어야 검증 엔진이 최종 후보 레코드를 보게 됩니다.

use crate::domain::dto::users::request::{UpdateUserRequest, UserDto};
use crate::domain::entities::users::User;
use crate::utils::string_utils::empty_to_none;

/// 등록 후보 엔티티를 만듭니다. `registration_date`는 비어 있습니다.
///
/// 생년월일이 없으면 `None`입니다. 빈 이메일은 `None`으로 정규화됩니다.
pub fn user_from_request(dto: UserDto) -> Option<User> {
    let date_of_birth = dto.date_of_birth?;

    Some(User::new(
        dto.cpf,
        dto.first_name,
        dto.last_name,
        date_of_birth,
        empty_to_none(dto.email),
    ))
}

/// 부분 수정 요청을 대상 엔티티에 병합합니다.
///
/// `cpf`와 `registration_date`는 변경하지 않습니다.
pub fn apply_update(request: &UpdateUserRequest, target: &mut User) {
    if let Some(first_name) = &request.first_name {
        target.first_name = first_name.clone();
    }
    if let Some(last_name) = &request.last_name {
        target.last_name = last_name.clone();
    }
    if let Some(date_of_birth) = request.date_of_birth {
        target.date_of_birth = date_of_birth;
    }

    if !request.email.is_absent() {
        let current = target.email.take();
        target.email = empty_to_none(request.email.clone().apply(current));
    }
}
