//! 사용자 관리 서비스
//!
//! 단일 `User` 리소스(CPF 식별)에 대한 CRUD HTTP 서비스입니다.
//! CPF 형식/중복, 나이 제한, 이메일 형식/중복 검증과
//! "생략 / null / 값"을 구분하는 부분 수정을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 등록, 조회, 이름 검색, 페이징 목록, 부분 수정, 삭제
//! - **검증 엔진**: 순서가 고정된 다섯 가지 충돌 규칙, 첫 실패에서 중단
//! - **형식 검증**: `validator` derive 기반, 모든 위반 수집
//! - **저장소 교체**: PostgreSQL(`sqlx`) 또는 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/user, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 엔진, 병합, CRUD
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PostgreSQL/메모리│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use usercontrol_service::core::clock::SystemClock;
//! use usercontrol_service::repositories::users::InMemoryUserRepository;
//! use usercontrol_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(SystemClock));
//! let user = service.create_user(dto).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
