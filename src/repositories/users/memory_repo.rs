//! 메모리 기반 사용자 리포지토리
//!
//! `STORE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! PostgreSQL 구현과 같은 제약(CPF 기본키, 이메일 유일성)과 정렬 규칙을 따릅니다.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::entities::users::User;
use crate::domain::models::{Direction, Page, PageRequest, SortField, UserConflict};
use crate::repositories::users::UserStore;

/// CPF를 키로 정렬된 맵에 사용자를 보관합니다.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, User>>, AppError> {
        self.users.read().context("user store lock poisoned")
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, User>>, AppError> {
        self.users.write().context("user store lock poisoned")
    }

    fn filter<F>(&self, predicate: F) -> Result<Vec<User>, AppError>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?.values().filter(|user| predicate(user)).cloned().collect())
    }
}

fn email_taken_by_other(users: &BTreeMap<String, User>, user: &User) -> bool {
    match user.email.as_deref() {
        Some(email) => users
            .values()
            .any(|other| other.cpf != user.cpf && other.email.as_deref() == Some(email)),
        None => false,
    }
}

/// `None`은 정렬 방향과 관계없이 마지막에 옵니다.
fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            Direction::Asc => a.cmp(&b),
            Direction::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by(field: SortField, direction: Direction, a: &User, b: &User) -> Ordering {
    let ordering = match field {
        SortField::Cpf => compare_optional(Some(&a.cpf), Some(&b.cpf), direction),
        SortField::FirstName => compare_optional(Some(&a.first_name), Some(&b.first_name), direction),
        SortField::LastName => compare_optional(Some(&a.last_name), Some(&b.last_name), direction),
        SortField::DateOfBirth => {
            compare_optional(Some(a.date_of_birth), Some(b.date_of_birth), direction)
        }
        SortField::Email => compare_optional(a.email.as_ref(), b.email.as_ref(), direction),
        SortField::RegistrationDate => {
            compare_optional(a.registration_date, b.registration_date, direction)
        }
    };

    ordering.then_with(|| a.cpf.cmp(&b.cpf))
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError> {
        Ok(self.read()?.contains_key(cpf))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .read()?
            .values()
            .any(|user| user.email.as_deref() == Some(email)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError> {
        self.filter(|user| user.email.as_deref() == Some(email))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.get(cpf).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<User>, AppError> {
        let users = self.read()?;
        let total = users.len() as u64;

        let mut sorted: Vec<&User> = users.values().collect();
        sorted.sort_by(|a, b| compare_by(request.sort.field, request.sort.direction, a, b));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = sorted
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn find_by_first_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        self.filter(|user| user.first_name.contains(fragment))
    }

    async fn find_by_last_name_contains(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        self.filter(|user| user.last_name.contains(fragment))
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if users.contains_key(&user.cpf) {
            return Err(UserConflict::CpfAlreadyExists.into());
        }
        if email_taken_by_other(&users, &user) {
            return Err(UserConflict::EmailAlreadyAssigned.into());
        }

        users.insert(user.cpf.clone(), user.clone());
        Ok(user)
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if email_taken_by_other(&users, &user) {
            return Err(UserConflict::EmailAlreadyAssigned.into());
        }

        if let Some(existing) = users.get(&user.cpf) {
            user.registration_date = existing.registration_date;
        }

        users.insert(user.cpf.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, cpf: &str) -> Result<bool, AppError> {
        Ok(self.write()?.remove(cpf).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Sort;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn user(cpf: &str, first_name: &str, last_name: &str, email: Option<&str>) -> User {
        User::new(
            cpf.to_string(),
            first_name.to_string(),
            last_name.to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email.map(str::to_string),
        )
    }

    async fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("33333333333", "Carol", "Silva", Some("carol@fake.com"))).await.unwrap();
        repo.insert(user("11111111111", "Ann", "Lee", None)).await.unwrap();
        repo.insert(user("22222222222", "Bob", "Leeds", Some("bob@fake.com"))).await.unwrap();
        repo
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_cpf() {
        let repo = seeded().await;

        let result = repo.insert(user("11111111111", "Other", "Person", None)).await;

        match result {
            Err(AppError::ConflictError(message)) => {
                assert_eq!(message, "Conflict: CPF exist already!")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_email_uniqueness_is_enforced() {
        let repo = seeded().await;

        let result = repo.insert(user("44444444444", "Dan", "Cruz", Some("bob@fake.com"))).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        let mut carol = repo.find_by_cpf("33333333333").await.unwrap().unwrap();
        carol.email = Some("bob@fake.com".to_string());
        assert!(matches!(repo.save(carol).await, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_users_without_email_do_not_conflict() {
        let repo = seeded().await;

        assert!(repo.insert(user("44444444444", "Dan", "Cruz", None)).await.is_ok());
        assert!(!repo.exists_by_email("").await.unwrap());
    }

    #[actix_web::test]
    async fn test_save_preserves_registration_date() {
        let repo = InMemoryUserRepository::new();
        let registered_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let mut ann = user("11111111111", "Ann", "Lee", None);
        ann.register(registered_at);
        repo.insert(ann).await.unwrap();

        let renamed = user("11111111111", "Anna", "Lee", None);
        let saved = repo.save(renamed).await.unwrap();

        assert_eq!(saved.first_name, "Anna");
        assert_eq!(saved.registration_date, Some(registered_at));
    }

    #[actix_web::test]
    async fn test_find_all_sorts_and_pages() {
        let repo = seeded().await;

        let first_page = repo.find_all(&PageRequest { page: 0, size: 2, ..PageRequest::default() }).await.unwrap();
        let cpfs: Vec<&str> = first_page.content.iter().map(|u| u.cpf.as_str()).collect();
        assert_eq!(cpfs, vec!["11111111111", "22222222222"]);
        assert_eq!(first_page.total_elements, 3);
        assert_eq!(first_page.total_pages(), 2);

        let by_email_desc = PageRequest {
            sort: Sort {
                field: SortField::Email,
                direction: Direction::Desc,
            },
            ..PageRequest::default()
        };
        let page = repo.find_all(&by_email_desc).await.unwrap();
        let names: Vec<&str> = page.content.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Ann"]);
    }

    #[actix_web::test]
    async fn test_name_search_is_case_sensitive_substring() {
        let repo = seeded().await;

        let lee = repo.find_by_last_name_contains("Lee").await.unwrap();
        assert_eq!(lee.len(), 2);

        assert!(repo.find_by_last_name_contains("lee").await.unwrap().is_empty());
        assert_eq!(repo.find_by_first_name_contains("o").await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_delete() {
        let repo = seeded().await;

        assert!(repo.delete("11111111111").await.unwrap());
        assert!(!repo.delete("11111111111").await.unwrap());
        assert!(!repo.exists_by_cpf("11111111111").await.unwrap());
    }
}
