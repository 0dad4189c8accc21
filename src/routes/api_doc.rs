//! OpenAPI 문서
//!
//! 핸들러의 `#[utoipa::path]` 선언을 모아 `GET /api-docs/openapi.json`으로 제공합니다.

use actix_web::{get, HttpResponse};
use utoipa::OpenApi;

use crate::domain::dto::users::request::{UpdateUserRequest, UserDto};
use crate::domain::entities::users::User;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "usercontrol_service", description = "API REST Users"),
    paths(
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::filter_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
    ),
    components(schemas(User, UserDto, UpdateUserRequest)),
    tags((name = "users", description = "사용자 등록, 조회, 수정, 삭제"))
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
