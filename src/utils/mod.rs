//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`cpf`] - CPF 식별자 형식/검증 숫자 확인
//! - [`string_utils`] - 문자열 정규화, 필드명 변환
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::cpf::CpfRule;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(CpfRule::Checksum.is_valid("12345678909"));
//! print_boxed_title("System Initialized");
//! ```

pub mod cpf;
pub mod display_terminal;
pub mod string_utils;
