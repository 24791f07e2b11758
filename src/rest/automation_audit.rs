use super::error::RestApiError;
use crate::lead::Submission;
use crate::service::AuditService;
use actix_web::{
    dev::HttpServiceFactory,
    http::Method,
    middleware::DefaultHeaders,
    web::{self, Bytes, Data, Json},
    HttpResponse,
};
use serde_json::{json, Value};
use tracing::{error, warn};

/// Lead capture endpoint. Cross-origin headers are attached to every response,
/// errors included.
pub fn resource(path: &str) -> impl HttpServiceFactory + 'static {
    web::resource(path)
        .route(web::post().to(post))
        .route(web::method(Method::OPTIONS).to(options))
        .default_service(web::to(method_not_allowed))
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Origin", "*"))
                .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
                .add(("Access-Control-Allow-Headers", "Content-Type")),
        )
}

async fn post(body: Bytes, service: Data<AuditService>) -> Result<Json<Value>, RestApiError> {
    let lead = Submission::parse(&body).validate().map_err(|e| {
        warn!(error = %e, "Rejected automation audit submission");
        RestApiError::from(e)
    })?;
    service.submit(lead).await.map_err(|e| {
        error!(error = %e, "Automation audit error");
        RestApiError::from(e)
    })?;
    Ok(Json(json!({ "success": true })))
}

async fn options() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, RestApiError> {
    Err(RestApiError::method_not_allowed())
}
