use super::{types::ErrorResponse, uploads::UploadStore};
use crate::{
    Error, Result,
    analysis::{AnalysisContext, AnalysisReport, FoodAnalyzer, FoodImage},
    llm::{Credential, MISSING_KEY_MESSAGE},
};
use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<FoodAnalyzer>,
    pub uploads: Arc<UploadStore>,
    pub max_image_bytes: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> std::result::Result<Json<AnalysisReport>, ApiError> {
    let (credential, image) = read_submission(multipart, state.max_image_bytes)
        .await
        .map_err(error_response)?;
    let ctx = AnalysisContext::new(credential);
    info!(
        request_id = %ctx.request_id,
        "Received {} byte image for analysis",
        image.len()
    );

    let staged = state.uploads.stage(&image).await.map_err(error_response)?;
    let image = FoodImage::load(staged.path())
        .await
        .map_err(error_response)?;

    match state.analyzer.analyze(&ctx, &image).await {
        Ok(report) => {
            info!(request_id = %ctx.request_id, "Analysis complete");
            Ok(Json(report))
        }
        Err(e) => {
            error!(request_id = %ctx.request_id, "Analysis failed: {}", e);
            Err(error_response(e))
        }
    }
}

async fn read_submission(
    mut multipart: Multipart,
    max_image_bytes: usize,
) -> Result<(Credential, FoodImage)> {
    let mut credential = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e, max_image_bytes))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "api_key" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read api_key", e, max_image_bytes))?;
                credential = Some(Credential::new(value)?);
            }
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read image", e, max_image_bytes))?;
                if data.len() > max_image_bytes {
                    return Err(Error::ImageTooLarge {
                        max: max_image_bytes,
                    });
                }
                image = Some(FoodImage::new(data.to_vec()));
            }
            _ => {}
        }
    }

    let credential = credential.ok_or_else(|| Error::upload(MISSING_KEY_MESSAGE))?;
    let image = image.ok_or_else(|| Error::upload("Please choose an image to analyze."))?;

    if image.is_empty() {
        return Err(Error::upload("The uploaded image is empty."));
    }
    if !image.is_jpeg() {
        return Err(Error::upload("Only JPEG images are supported."));
    }

    Ok((credential, image))
}

/// Body-limit rejections surface mid-parse; report them as oversize, not malformed.
fn multipart_error(context: &str, e: MultipartError, max_image_bytes: usize) -> Error {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::ImageTooLarge {
            max: max_image_bytes,
        }
    } else {
        Error::upload(format!("{}: {}", context, e))
    }
}

fn error_response(e: Error) -> ApiError {
    let status = match e {
        Error::Upload(_) => StatusCode::BAD_REQUEST,
        Error::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        Error::Llm(_) | Error::Network(_) | Error::Serialization(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let error = match e {
        Error::Upload(msg) => msg,
        other => other.to_string(),
    };
    (status, Json(ErrorResponse { error }))
}
