//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생성, 조회, 수정, 삭제와 검증 규칙을 담당합니다.
//! Spring Framework의 `@Service` 계층과 같은 역할입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UserService                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐    │
//! │  │  Shape Check  │  │  Validation   │  │  Query / CRUD │    │
//! │  │ (UserDto)     │→ │  Engine       │→ │               │    │
//! │  │ 모든 위반 수집 │  │ 첫 실패 반환   │  │ insert / save │    │
//! │  └───────────────┘  └───────────────┘  └───────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//!             UserStore (PostgreSQL | InMemory) + Clock
//! ```
//!
//! ## 검증 엔진 규칙 순서
//!
//! 1. (신규) CPF 식별자 규칙 위반 → `InvalidCpf`
//! 2. (신규) CPF 중복 → `CpfAlreadyExists`
//! 3. 만 나이 19세 미만 → `AgeNotAllowed` (신규/기존 모두)
//! 4. 비어 있지 않은 이메일의 형식 위반 → `EmailInvalid`
//! 5. 이메일 중복 → `EmailAlreadyAssigned`
//!    (신규: 저장소 전체, 기존: CPF가 다른 레코드)
//!
//! 첫 번째로 실패한 규칙에서 멈추며, 사유를 합치지 않습니다.
//! 사전 검사는 최선의 노력이며 동시 요청 간 경쟁은 저장소 제약 조건이 최종적으로 막습니다.

use std::sync::Arc;

use log::{debug, info};

use crate::config::{is_valid_email, ValidationConfig};
use crate::core::clock::Clock;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{NameFilter, UpdateUserRequest, UserDto};
use crate::domain::entities::users::User;
use crate::domain::models::{Page, PageRequest, UserConflict};
use crate::repositories::users::UserStore;
use crate::services::users::user_mapper::{apply_update, user_from_request};
use crate::utils::cpf::CpfRule;

pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_DELETED: &str = "User has been deleted";

/// 사용자 관리 서비스
///
/// 저장소와 시계를 생성자로 주입받습니다. `web::Data`로 감싸 워커 간에 공유됩니다.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
    cpf_rule: CpfRule,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_cpf_rule(user_repo, clock, ValidationConfig::cpf_rule())
    }

    pub fn with_cpf_rule(user_repo: Arc<dyn UserStore>, clock: Arc<dyn Clock>, cpf_rule: CpfRule) -> Self {
        Self {
            user_repo,
            clock,
            cpf_rule,
        }
    }

    // ─── 검증 엔진 ────────────────────────────────────────────────

    /// 규칙을 순서대로 검사하고 첫 번째 충돌 사유를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(None)` - 모든 규칙 통과
    /// * `Ok(Some(UserConflict))` - 첫 번째로 실패한 규칙
    /// * `Err(AppError)` - 저장소 조회 실패
    pub async fn validate_user(&self, user: &User, is_new: bool) -> AppResult<Option<UserConflict>> {
        if is_new {
            if !self.cpf_rule.is_valid(&user.cpf) {
                return Ok(Some(UserConflict::InvalidCpf));
            }
            if self.exists_by_cpf(&user.cpf).await? {
                return Ok(Some(UserConflict::CpfAlreadyExists));
            }
        }

        if user.age_on(self.clock.today()) < ValidationConfig::MIN_REGISTRATION_AGE {
            return Ok(Some(UserConflict::AgeNotAllowed));
        }

        if let Some(email) = user.email() {
            if !is_valid_email(email) {
                return Ok(Some(UserConflict::EmailInvalid));
            }

            let assigned = if is_new {
                self.exists_by_email(email).await?
            } else {
                !self.find_users_by_email_and_cpf_differs(email, &user.cpf).await?.is_empty()
            };
            if assigned {
                return Ok(Some(UserConflict::EmailAlreadyAssigned));
            }
        }

        Ok(None)
    }

    // ─── 저장소 위임 ──────────────────────────────────────────────

    pub async fn exists_by_cpf(&self, cpf: &str) -> AppResult<bool> {
        self.user_repo.exists_by_cpf(cpf).await
    }

    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.user_repo.exists_by_email(email).await
    }

    /// 같은 이메일을 가진, CPF가 다른 사용자 목록
    pub async fn find_users_by_email_and_cpf_differs(&self, email: &str, cpf: &str) -> AppResult<Vec<User>> {
        let users = self.user_repo.find_by_email(email).await?;
        Ok(users.into_iter().filter(|user| user.cpf != cpf).collect())
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_cpf(cpf).await
    }

    pub async fn list_users(&self, request: &PageRequest) -> AppResult<Page<User>> {
        self.user_repo.find_all(request).await
    }

    pub async fn find_by_first_name_contains(&self, fragment: &str) -> AppResult<Vec<User>> {
        self.user_repo.find_by_first_name_contains(fragment).await
    }

    pub async fn find_by_last_name_contains(&self, fragment: &str) -> AppResult<Vec<User>> {
        self.user_repo.find_by_last_name_contains(fragment).await
    }

    pub async fn filter_users(&self, filter: &NameFilter) -> AppResult<Vec<User>> {
        match filter {
            NameFilter::FirstName(fragment) => self.find_by_first_name_contains(fragment).await,
            NameFilter::LastName(fragment) => self.find_by_last_name_contains(fragment).await,
        }
    }

    /// CPF 기준 upsert
    pub async fn save(&self, user: User) -> AppResult<User> {
        let saved = self.user_repo.save(user).await?;
        info!("User saved -> cpf:{}", saved.cpf);
        Ok(saved)
    }

    // ─── 요청 단위 연산 ───────────────────────────────────────────

    /// CPF로 사용자를 조회합니다. 없으면 `NotFound`입니다.
    pub async fn get_user(&self, cpf: &str) -> AppResult<User> {
        self.find_by_cpf(cpf)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 형식 위반은 `Violations`, 규칙 위반은 `ConflictError`로 반환하며
    /// 등록 시각은 서버 시계로 기록됩니다.
    pub async fn create_user(&self, dto: UserDto) -> AppResult<User> {
        let violations = dto.violations();
        if !violations.is_empty() {
            debug!("등록 요청 형식 위반: {:?}", violations);
            return Err(AppError::Violations(violations));
        }

        let mut user = user_from_request(dto)
            .ok_or_else(|| AppError::Violations(vec!["dateOfBirth: must not be null".to_string()]))?;

        if let Some(conflict) = self.validate_user(&user, true).await? {
            debug!("등록 거부 (cpf:{}): {}", user.cpf, conflict);
            return Err(conflict.into());
        }

        user.register(self.clock.now());
        let created = self.user_repo.insert(user).await?;
        info!("User saved -> cpf:{}", created.cpf);

        Ok(created)
    }

    /// 기존 사용자를 부분 수정합니다.
    ///
    /// 병합 결과를 `UserDto` 형식으로 다시 검사한 뒤 검증 엔진을 `is_new = false`로 실행합니다.
    pub async fn update_user(&self, cpf: &str, request: UpdateUserRequest) -> AppResult<User> {
        let mut user = self.get_user(cpf).await?;
        apply_update(&request, &mut user);

        let violations = UserDto::from(&user).violations();
        if !violations.is_empty() {
            debug!("수정 요청 형식 위반 (cpf:{}): {:?}", cpf, violations);
            return Err(AppError::Violations(violations));
        }

        if let Some(conflict) = self.validate_user(&user, false).await? {
            debug!("수정 거부 (cpf:{}): {}", cpf, conflict);
            return Err(conflict.into());
        }

        self.save(user).await
    }

    /// 사용자를 삭제합니다. 없으면 `NotFound`입니다.
    pub async fn delete_user(&self, cpf: &str) -> AppResult<()> {
        let user = self.get_user(cpf).await?;

        if !self.user_repo.delete(&user.cpf).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }
        info!("User deleted -> cpf:{}", user.cpf);

        Ok(())
    }
}
