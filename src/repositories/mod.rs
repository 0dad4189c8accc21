//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_cpf("12345678901").await?;
//! ```

pub mod users;
