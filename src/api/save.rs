use actix_web::{
    dev::HttpServiceFactory,
    http::{header::ContentType, Method},
    middleware::DefaultHeaders,
    web::{self, Data, Payload},
    HttpRequest, HttpResponse,
};
use log::{error, info, warn};

use crate::{ConfigDocument, ConfigStore, SaveError, Settings};

pub const TOKEN_HEADER: &str = "X-Save-Token";

/// CORS headers are attached to every response, errors included.
pub fn resource() -> impl HttpServiceFactory {
    web::resource("/save")
        .route(web::post().to(save))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
                .add(("Access-Control-Allow-Headers", "Content-Type, X-Save-Token")),
        )
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, SaveError> {
    Err(SaveError::MethodNotAllowed)
}

async fn save(
    req: HttpRequest,
    payload: Payload,
    settings: Data<Settings>,
    store: Data<ConfigStore>,
) -> Result<HttpResponse, SaveError> {
    if !settings.can_save() {
        error!("CRITICAL: SAVE_TOKEN is not configured. Refusing to save.");
        return Err(SaveError::NotConfigured);
    }

    let supplied = req
        .headers()
        .get(TOKEN_HEADER)
        .map(|value| value.as_bytes())
        .unwrap_or_default();
    if supplied != settings.token.as_bytes() {
        return Err(SaveError::InvalidToken);
    }

    let limit = settings.max_body_bytes.unwrap_or(usize::MAX);
    let body = match payload.to_bytes_limited(limit).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            error!("Failed to read request body: {e}");
            return Err(SaveError::ReadBody);
        }
        Err(_) => {
            warn!("Rejected request body larger than {limit} bytes");
            return Err(SaveError::BodyTooLarge);
        }
    };

    let document = ConfigDocument::parse(&body)?;
    let content = document.to_pretty().map_err(|e| {
        error!("Failed to encode config document: {e}");
        SaveError::WriteFile
    })?;

    if let Err(e) = store.replace(&content).await {
        error!(
            "Failed to write config file {}: {e}",
            store.target().display()
        );
        return Err(SaveError::WriteFile);
    }

    info!("Configuration file saved successfully.");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Configuration saved successfully."))
}
