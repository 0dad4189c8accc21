//! 사용자 응답 DTO 모듈
//!
//! 단건 응답은 [`User`](crate::domain::entities::users::User)를 그대로 직렬화하고,
//! 목록 응답은 [`PageResponse`]로 감쌉니다.

pub mod page_response;

pub use page_response::PageResponse;
