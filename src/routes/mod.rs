//! 라우트 설정 모듈
//!
//! 헬스체크와 사용자 API를 애플리케이션에 등록하고, 요청 추출 실패를
//! `AppError::ValidationError`(400)로 변환하는 추출기 설정을 함께 등록합니다.
//!
//! ```text
//! /health                  GET
//! /api/user                POST, GET
//! /api/user/filter         GET
//! /api/user/{cpf}          GET, PUT, DELETE
//! /api-docs/openapi.json   GET
//! ```

pub mod api_doc;

use actix_web::{error, web, HttpRequest};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(user_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(health_check);
    cfg.service(api_doc::openapi_json);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// `/user/filter`는 `/user/{cpf}`보다 먼저 등록되어야 합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::filter_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "usercontrol_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
