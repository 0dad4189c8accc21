//! # Domain Entities Module
//!
//! 데이터베이스에 직접 저장되는 영속성 엔티티를 정의하는 모듈입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA | 이 모듈 |
//! |------------|---------|
//! | `@Entity @Table(name = "TB_USER")` | `User` + `tb_user` 테이블 |
//! | `@Id` | `cpf` |
//! | `@JsonFormat(pattern = ...)` | `registration_timestamp` serde 모듈 |
//! | JPA 매핑 | `sqlx::FromRow` |

pub mod users;
