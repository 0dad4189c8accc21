//! 사용자 엔티티 모듈
//!
//! [`User`](user::User) 엔티티와 등록 시각 직렬화 형식을 제공합니다.

pub mod user;

pub use user::User;
