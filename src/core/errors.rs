//! # Application Error Handling System
//!
//! 사용자 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | HTTP 상태 | 응답 본문 |
//! |------|------|-----------|-----------|
//! | 리소스 없음 | `NotFound` | 404 | JSON 문자열 |
//! | 비즈니스 규칙 충돌 | `ConflictError` | 409 | JSON 문자열 |
//! | 필드 형식 위반 | `Violations` | 409 | JSON 문자열 배열 |
//! | 잘못된 요청 | `ValidationError` | 400 | `{"error": ...}` |
//! | 저장소 오류 | `DatabaseError` | 500 | `{"error": ...}` |
//! | 내부 오류 | `InternalError` | 500 | `{"error": ...}` |
//!
//! `NotFound`, `ConflictError`, `Violations`는 API 계약의 일부이므로
//! 메시지 자체가 본문이 됩니다. 나머지는 `error` 키로 감싸서 반환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_user(cpf: &str) -> Result<User, AppError> {
//!     repo.find_by_cpf(cpf)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 요청 단위로 발생하는 모든 에러를 포괄하며, 자동으로 HTTP 응답으로 변환됩니다.
/// 어떤 에러도 프로세스 전체에 치명적이지 않으며 재시도하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 잘못된 요청 형식 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 비즈니스 규칙 충돌 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 필드 단위 형식 위반 목록 (409 Conflict)
    #[error("Field violations: {}", .0.join(", "))]
    Violations(Vec<String>),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) | AppError::Violations(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::NotFound(message) | AppError::ConflictError(message) => {
                builder.json(message)
            }
            AppError::Violations(violations) => builder.json(violations),
            _ => {
                if self.status_code().is_server_error() {
                    log::error!("{}", self);
                }
                builder.json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(error: AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("page must be a number".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);

        let body = body_json(AppError::NotFound("User not found".to_string()));
        assert_eq!(body, serde_json::json!("User not found"));
    }

    #[test]
    fn test_conflict_error_body_is_bare_reason() {
        let error = AppError::ConflictError("Conflict: invalid CPF!".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);

        let body = body_json(AppError::ConflictError("Conflict: invalid CPF!".to_string()));
        assert_eq!(body, serde_json::json!("Conflict: invalid CPF!"));
    }

    #[test]
    fn test_violations_render_as_list() {
        let violations = vec![
            "firstName: must not be blank".to_string(),
            "lastName: must not be blank".to_string(),
        ];
        let error = AppError::Violations(violations.clone());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);

        let body = body_json(AppError::Violations(violations));
        assert_eq!(
            body,
            serde_json::json!(["firstName: must not be blank", "lastName: must not be blank"])
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
