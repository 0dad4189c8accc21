//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody @Valid UserDto` | `UserDto` | 등록 요청 + 형식 검증 |
//! | `@RequestBody UserDto` (수정) | `UpdateUserRequest` | 부분 수정 요청 |
//! | `Pageable` | `PageQuery` | 페이징 파라미터 |
//! | `Page<User>` | `PageResponse<User>` | 페이지 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── user_dto.rs       # 등록 요청, 필드 규칙
//! │   ├── update_user.rs    # 부분 수정 요청 (email 3상태)
//! │   └── query.rs          # page/size/sort, firstname/lastname
//! └── response/
//!     └── page_response.rs  # 페이지 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
