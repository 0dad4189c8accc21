//! 사용자 검증 충돌 사유
//!
//! 검증 엔진이 반환하는 다섯 가지 충돌 사유입니다. 서로 배타적이며
//! 검증 순서대로 선언되어 있습니다. `Display` 출력이 곧 응답 본문입니다.

use thiserror::Error;

use crate::core::errors::AppError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserConflict {
    #[error("Conflict: invalid CPF!")]
    InvalidCpf,

    #[error("Conflict: CPF exist already!")]
    CpfAlreadyExists,

    #[error("Conflict: Only users over 18 years of age must be registered!")]
    AgeNotAllowed,

    #[error("Conflict: This email is invalid!")]
    EmailInvalid,

    #[error("Conflict: This email has been assigned another user!")]
    EmailAlreadyAssigned,
}

impl From<UserConflict> for AppError {
    fn from(conflict: UserConflict) -> Self {
        AppError::ConflictError(conflict.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_becomes_conflict_error() {
        let error: AppError = UserConflict::CpfAlreadyExists.into();

        match error {
            AppError::ConflictError(reason) => assert_eq!(reason, "Conflict: CPF exist already!"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
    }
}
