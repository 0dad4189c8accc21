//! # Domain Layer Module
//!
//! 사용자 관리 도메인의 엔티티, DTO, 값 객체를 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (User, tb_user)
//! ├── dto       - 요청/응답 데이터 구조
//! └── models    - Patch, Page, UserConflict 등 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `Pageable` / `Page<T>` | `models::page` | 페이징 |
//! | `JsonNullable<T>` | `models::Patch` | 생략/null/값 구분 |
//! | `@Valid` | `validator` derive | 데이터 유효성 검사 |

pub mod dto;
pub mod entities;
pub mod models;
