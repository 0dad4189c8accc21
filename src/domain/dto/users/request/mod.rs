//! 사용자 요청 DTO 모듈
//!
//! - [`user_dto`] - 등록 요청 본문 및 형식 검증 (`UserDto`)
//! - [`update_user`] - 부분 수정 요청 본문 (`UpdateUserRequest`)
//! - [`query`] - 페이징/이름 검색 쿼리 파라미터

pub mod query;
pub mod update_user;
pub mod user_dto;

pub use query::{NameFilter, PageQuery, UserFilterQuery};
pub use update_user::UpdateUserRequest;
pub use user_dto::UserDto;
