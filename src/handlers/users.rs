//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트입니다. 모든 경로는 `/api` 스코프 아래에 등록됩니다.
//! 핸들러는 요청을 역직렬화해 [`UserService`]에 위임하고 결과를 JSON으로 돌려줄 뿐이며,
//! 상태 코드는 `AppError`의 `ResponseError` 구현이 결정합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/api/user` | 201 + 레코드 | 409 사유 문자열 / 409 위반 목록 |
//! | `GET` | `/api/user` | 200 + 페이지 | 400 잘못된 정렬 |
//! | `GET` | `/api/user/filter` | 200 + 목록 | 400 검색 조건 없음 |
//! | `GET` | `/api/user/{cpf}` | 200 + 레코드 | 404 `"User not found"` |
//! | `DELETE` | `/api/user/{cpf}` | 200 `"User has been deleted"` | 404 |
//! | `PUT` | `/api/user/{cpf}` | 200 + 레코드 | 404 / 409 |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/api")
//! public class UserController {
//!     @PostMapping("/user")
//!     public ResponseEntity<Object> saveUser(@RequestBody @Valid UserDto userDto) { ... }
//!
//!     @GetMapping("/user/{cpf}")
//!     public ResponseEntity<Object> getOneUser(@PathVariable String cpf) { ... }
//! }
//! ```
//!
//! ```rust,ignore
//! #[utoipa::path(post, path = "/api/user", request_body = UserDto, tag = "users")]
//! #[post("/user")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<UserDto>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(user))
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{NameFilter, PageQuery, UpdateUserRequest, UserDto, UserFilterQuery};
use crate::domain::dto::users::response::PageResponse;
use crate::domain::entities::users::User;
use crate::domain::models::PageRequest;
use crate::services::users::{UserService, USER_DELETED};

/// 사용자 등록 핸들러
///
/// # 요청
///
/// ```json
/// {
///   "cpf": "12345678901",
///   "firstName": "Ann",
///   "lastName": "Lee",
///   "dateOfBirth": "1990-01-01",
///   "email": "ann@fake.com"
/// }
/// ```
///
/// # 응답
///
/// - `201 Created` - 등록 시각(`registrationDate`)이 채워진 레코드
/// - `409 Conflict` - `"Conflict: CPF exist already!"` 같은 사유 문자열
/// - `409 Conflict` - `["firstName: must not be blank", ...]` 형식 위반 목록
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "users",
    request_body = UserDto,
    responses(
        (status = 201, description = "등록된 사용자", body = User),
        (status = 409, description = "충돌 사유 문자열 또는 형식 위반 목록", body = String),
        (status = 400, description = "잘못된 JSON 본문")
    )
)]
#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// 사용자 목록 (페이징)
///
/// `?page=0&size=10&sort=firstName,desc`
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "users",
    params(PageQuery),
    responses(
        (status = 200, description = "사용자 페이지", body = PageResponse<User>),
        (status = 400, description = "정렬 기준이 허용 목록에 없음")
    )
)]
#[get("/user")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let request = PageRequest::try_from(query.into_inner())?;
    let page = service.list_users(&request).await?;
    Ok(HttpResponse::Ok().json(PageResponse::from(page)))
}

/// 이름 부분 일치 검색
///
/// `?firstname=An` 또는 `?lastname=Lee`. 결과가 없으면 빈 배열입니다.
#[utoipa::path(
    get,
    path = "/api/user/filter",
    tag = "users",
    params(UserFilterQuery),
    responses(
        (status = 200, description = "이름이 부분 일치하는 사용자", body = Vec<User>),
        (status = 400, description = "검색 조건 없음")
    )
)]
#[get("/user/filter")]
pub async fn filter_users(
    service: web::Data<UserService>,
    query: web::Query<UserFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = NameFilter::try_from(query.into_inner())?;
    let users = service.filter_users(&filter).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    get,
    path = "/api/user/{cpf}",
    tag = "users",
    params(("cpf" = String, Path, description = "사용자 CPF")),
    responses(
        (status = 200, description = "사용자", body = User),
        (status = 404, description = "User not found", body = String)
    )
)]
#[get("/user/{cpf}")]
pub async fn get_user(
    service: web::Data<UserService>,
    cpf: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&cpf).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    delete,
    path = "/api/user/{cpf}",
    tag = "users",
    params(("cpf" = String, Path, description = "사용자 CPF")),
    responses(
        (status = 200, description = "User has been deleted", body = String),
        (status = 404, description = "User not found", body = String)
    )
)]
#[delete("/user/{cpf}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    cpf: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&cpf).await?;
    Ok(HttpResponse::Ok().json(USER_DELETED))
}

/// 사용자 부분 수정 핸들러
///
/// 본문에 없는 필드는 유지되고, `"email": null`은 이메일을 지웁니다.
/// 본문의 `cpf`는 무시되며 경로의 CPF만 사용됩니다.
#[utoipa::path(
    put,
    path = "/api/user/{cpf}",
    tag = "users",
    params(("cpf" = String, Path, description = "사용자 CPF")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "수정된 사용자", body = User),
        (status = 404, description = "User not found", body = String),
        (status = 409, description = "충돌 사유 문자열 또는 형식 위반 목록", body = String)
    )
)]
#[put("/user/{cpf}")]
pub async fn update_user(
    service: web::Data<UserService>,
    cpf: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(&cpf, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
