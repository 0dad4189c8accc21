//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 구성 요소를 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트를 붙여 변환
//!
//! ### [`clock`] - 시간 소스
//! - **Clock**: 현재 시각/날짜를 제공하는 trait
//! - **SystemClock**: 실제 시스템 시계
//! - **FixedClock**: 테스트용 고정 시계
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | `ResponseEntity.status(CONFLICT)` | `AppError::ConflictError` |
//! | `LocalDate.now()` | `Clock::today()` (주입 가능) |

pub mod clock;
pub mod errors;

pub use clock::*;
pub use errors::*;
