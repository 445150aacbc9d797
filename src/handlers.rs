use crate::constants::{GREETING, IMAGE_FIELD};
use crate::error::AppError;
use crate::relay::{build_vision_request, encode_image, send_vision_request};
use crate::server::AppState;
use crate::upload::{sanitize_filename, storage_path, store_field};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use log::{info, warn};

pub async fn root() -> &'static str {
    GREETING
}

pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let raw_name = match field.file_name() {
            Some(name) => name.to_string(),
            None => return Err(AppError::MissingImage),
        };
        let filename = sanitize_filename(&raw_name)
            .ok_or_else(|| AppError::InvalidFilename(raw_name.clone()))?
            .to_string();

        let path = storage_path(&state.config.upload_dir, &filename);
        let written = store_field(&mut field, &path).await?;
        info!("stored upload {} ({} bytes)", path.display(), written);

        return Ok(format!("Image uploaded successfully: {}\n", filename));
    }

    Err(AppError::MissingImage)
}

/// Forwards the stored canvas image to the vision API.
///
/// Whatever the API answers is printed to stdout and the caller gets an empty
/// 200; only an unreadable image or a failed connection yields an error.
pub async fn send_image(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let config = &state.config;
    let path = config.relay_source_path();

    let image_base64 = encode_image(&path)
        .await
        .map_err(|source| AppError::RelaySource {
            path: path.clone(),
            source,
        })?;
    info!(
        "relaying {} ({} base64 bytes) to {}",
        path.display(),
        image_base64.len(),
        config.api_url
    );

    let request_body = build_vision_request(&config.model, &image_base64);
    let (status, response_body) = send_vision_request(
        &state.client,
        &config.api_url,
        &config.api_key,
        &request_body,
    )
    .await?;
    if !status.is_success() {
        warn!("vision API responded {}", status);
    }

    println!("{}", response_body);
    Ok(StatusCode::OK)
}
