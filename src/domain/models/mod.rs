//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 영속성 엔티티(`../entities/`)와 달리 식별자가 없고 값 자체가 의미를 가집니다.
//!
//! ## 모듈 구성
//!
//! - [`patch`] - 부분 수정용 3상태 필드 `Patch<T>`
//! - [`page`] - 페이지 요청/결과 (`PageRequest`, `Page<T>`)
//! - [`user_conflict`] - 검증 실패 사유 `UserConflict`
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `JsonNullable<T>` | `Patch<T>` |
//! | `Pageable` | `PageRequest` |
//! | `Page<T>` | `Page<T>` |

pub mod page;
pub mod patch;
pub mod user_conflict;

pub use page::*;
pub use patch::*;
pub use user_conflict::*;
