//! 사용자 관리 서비스 모듈
//!
//! - [`user_service`] - 검증 엔진과 CRUD 연산 (`UserService`)
//! - [`user_mapper`] - 요청 DTO와 엔티티 간 변환 및 부분 수정 병합
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::clock::SystemClock;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(SystemClock));
//! let user = service.get_user("12345678901").await?;
//! ```

pub mod user_mapper;
pub mod user_service;

pub use user_service::{UserService, USER_DELETED, USER_NOT_FOUND};
