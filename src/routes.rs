use actix_web::{
    error::PayloadError,
    http::{header::ContentType, StatusCode},
    web::{self, BytesMut},
    HttpRequest, HttpResponse, ResponseError,
};
use futures_util::StreamExt;
use thiserror::Error;

use crate::log::{Store, StoreError};
use crate::models::CapturedRequest;

pub const SAVED: &str = "Request received and saved";

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Failed to read request body")]
    ReadBody(#[from] PayloadError),

    #[error("Failed to save request")]
    Save(#[source] StoreError),

    #[error("Failed to read saved requests")]
    Check(#[source] StoreError),
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// `/check` retrieves the log; anything else is captured.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/check").to(check))
        .default_service(web::to(capture));
}

pub async fn capture(
    request: HttpRequest,
    mut payload: web::Payload,
    store: web::Data<Store>,
) -> Result<HttpResponse, RouteError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk?);
    }

    let record = CapturedRequest::from_request(&request, &body.freeze());
    println!("{}", record.summary());

    let offset = store.append(record).await.map_err(|e| {
        tracing::warn!(error = %e, path = %store.path().display(), "cannot persist request log");
        RouteError::Save(e)
    })?;
    tracing::debug!(offset, "request log persisted");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(SAVED))
}

pub async fn check(store: web::Data<Store>) -> Result<HttpResponse, RouteError> {
    let data = store.snapshot().await.map_err(|e| {
        tracing::warn!(error = %e, path = %store.path().display(), "cannot read request log");
        RouteError::Check(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(data))
}
