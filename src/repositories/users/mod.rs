//! 사용자 데이터 액세스 계층
//!
//! 서비스는 [`UserStore`] 트레이트에만 의존하며, 구현체는 실행 시 선택됩니다.
//!
//! - [`user_repo::PgUserRepository`] - PostgreSQL `tb_user` 테이블 (`STORE_BACKEND=postgres`)
//! - [`memory_repo::InMemoryUserRepository`] - 프로세스 메모리 (`STORE_BACKEND=memory`, 테스트)
//!
//! 두 구현 모두 CPF 기본키와 이메일 유일성(빈 값/`NULL` 제외)을 저장소 수준에서 보장합니다.
//! 위반 시 `AppError::ConflictError`를 반환하며, 메시지는 서비스 검증과 동일합니다.

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::{Page, PageRequest};

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::PgUserRepository;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError>;

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, AppError>;

    async fn find_all(&self, request: &PageRequest) -> Result<Page<User>, AppError>;

    /// 대소문자를 구분하는 부분 문자열 검색
    async fn find_by_first_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError>;

    async fn find_by_last_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError>;

    /// 새 레코드 삽입. 같은 CPF가 있으면 충돌입니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// CPF 기준 upsert. 기존 레코드의 `registration_date`는 보존됩니다.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// 삭제된 레코드가 있었으면 `true`
    async fn delete(&self, cpf: &str) -> Result<bool, AppError>;
}
