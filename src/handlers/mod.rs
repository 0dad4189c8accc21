//! HTTP 요청 핸들러 모듈
//!
//! 라우트 등록은 [`routes`](crate::routes) 모듈에서 수행합니다.

pub mod users;
