//! # PostgreSQL 사용자 리포지토리
//!
//! `tb_user` 테이블에 대한 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **런타임 쿼리**: `sqlx::query_as` + `FromRow` 매핑 (컴파일 타임 DB 연결 불필요)
//! - **정렬 화이트리스트**: `ORDER BY` 컬럼은 [`SortField`](crate::domain::models::SortField)에서만 옴
//! - **제약 조건 매핑**: 유니크 위반을 `UserConflict` 메시지로 변환

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::postgres::PgPool;

use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::{Page, PageRequest, UserConflict};
use crate::repositories::users::UserStore;

const USER_COLUMNS: &str = "cpf, first_name, last_name, date_of_birth, email, registration_date";

/// 이메일 부분 유니크 인덱스 이름 (`db::SCHEMA_STATEMENTS` 참고)
const EMAIL_UNIQUE_INDEX: &str = "tb_user_email_key";

/// `tb_user` 기본키 제약 이름 (PostgreSQL 기본 명명 규칙)
const PRIMARY_KEY_CONSTRAINT: &str = "tb_user_pkey";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_where_contains(&self, column: &str, fragment: &str) -> Result<Vec<User>, AppError> {
        let sql = format!(
            "SELECT {} FROM tb_user WHERE strpos({}, $1) > 0 ORDER BY cpf",
            USER_COLUMNS, column
        );

        let users = sqlx::query_as::<_, User>(&sql)
            .bind(fragment)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}

/// 위반된 유니크 제약 이름에 대응하는 충돌 사유
///
/// 이름을 알 수 없는 경우 `tb_user`의 유일한 다른 유니크 제약인 기본키로 봅니다.
fn conflict_for_constraint(constraint: Option<&str>) -> UserConflict {
    match constraint {
        Some(EMAIL_UNIQUE_INDEX) => UserConflict::EmailAlreadyAssigned,
        Some(PRIMARY_KEY_CONSTRAINT) => UserConflict::CpfAlreadyExists,
        other => {
            warn!("알 수 없는 유니크 제약 {:?}, CPF 충돌로 처리", other);
            UserConflict::CpfAlreadyExists
        }
    }
}

/// 쓰기 연산의 유니크 위반을 충돌 사유로 변환합니다.
fn map_write_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let conflict = conflict_for_constraint(db_err.constraint());
            debug!("유니크 제약 위반: {:?} -> {}", db_err.constraint(), conflict);
            return conflict.into();
        }
    }
    AppError::from(err)
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tb_user WHERE cpf = $1)",
        )
        .bind(cpf)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tb_user WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM tb_user WHERE email = $1 ORDER BY cpf", USER_COLUMNS);

        let users = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM tb_user WHERE cpf = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<User>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tb_user")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM tb_user ORDER BY {} {} NULLS LAST, cpf ASC LIMIT $1 OFFSET $2",
            USER_COLUMNS,
            request.sort.field.column(),
            request.sort.direction.as_sql()
        );

        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let content = sqlx::query_as::<_, User>(&sql)
            .bind(i64::from(request.size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn find_by_first_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        self.find_where_contains("first_name", fragment).await
    }

    async fn find_by_last_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        self.find_where_contains("last_name", fragment).await
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO tb_user ({0}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {0}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&user.cpf)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.date_of_birth)
            .bind(&user.email)
            .bind(user.registration_date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO tb_user ({0}) VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (cpf) DO UPDATE SET \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 date_of_birth = EXCLUDED.date_of_birth, \
                 email = EXCLUDED.email \
             RETURNING {0}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&user.cpf)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.date_of_birth)
            .bind(&user.email)
            .bind(user.registration_date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn delete(&self, cpf: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tb_user WHERE cpf = $1")
            .bind(cpf)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SCHEMA_STATEMENTS;

    #[test]
    fn test_email_index_violation_is_email_conflict() {
        assert_eq!(
            conflict_for_constraint(Some(EMAIL_UNIQUE_INDEX)),
            UserConflict::EmailAlreadyAssigned
        );
    }

    #[test]
    fn test_primary_key_violation_is_cpf_conflict() {
        assert_eq!(
            conflict_for_constraint(Some(PRIMARY_KEY_CONSTRAINT)),
            UserConflict::CpfAlreadyExists
        );
        assert_eq!(conflict_for_constraint(None), UserConflict::CpfAlreadyExists);
    }

    #[test]
    fn test_constraint_names_match_schema() {
        let index_statement = format!("CREATE UNIQUE INDEX IF NOT EXISTS {}", EMAIL_UNIQUE_INDEX);
        assert!(
            SCHEMA_STATEMENTS.iter().any(|statement| statement.contains(&index_statement)),
            "schema must create the email index named {}",
            EMAIL_UNIQUE_INDEX
        );

        // 기본키 제약 이름은 `<table>_pkey`로 자동 생성됩니다.
        let table = PRIMARY_KEY_CONSTRAINT.trim_end_matches("_pkey");
        let table_statement = format!("CREATE TABLE IF NOT EXISTS {} (", table);
        assert!(SCHEMA_STATEMENTS.iter().any(|statement| statement.contains(&table_statement)));
        assert!(SCHEMA_STATEMENTS.iter().any(|statement| statement.contains("PRIMARY KEY")));
    }

    #[test]
    fn test_conflict_reason_text() {
        let error: AppError = conflict_for_constraint(Some(EMAIL_UNIQUE_INDEX)).into();

        match error {
            AppError::ConflictError(reason) => {
                assert_eq!(reason, "Conflict: This email has been assigned another user!")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }
}
