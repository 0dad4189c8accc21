//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소([`UserStore`](crate::repositories::users::UserStore))와
//! 시계([`Clock`](crate::core::clock::Clock))를 생성자로 주입받으며,
//! `main`에서 한 번 생성해 `web::Data`로 핸들러에 공유합니다.

pub mod users;
