use crate::constants::{DEFAULT_VISION_INSTRUCTIONS, IMAGE_DATA_URI_PREFIX};
use crate::vision::VisionRequestBody;
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid credential header: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("request to vision API failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub fn build_headers(api_key: &str) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub async fn encode_image(image_path: &Path) -> std::io::Result<String> {
    let buffer = tokio::fs::read(image_path).await?;
    Ok(base64::encode(buffer))
}

// Always labelled JPEG, whatever the stored file actually is.
pub fn image_data_uri(image_base64: &str) -> String {
    format!("{}{}", IMAGE_DATA_URI_PREFIX, image_base64)
}

pub fn build_vision_request(model: &str, image_base64: &str) -> VisionRequestBody {
    VisionRequestBody::single_image(
        model,
        DEFAULT_VISION_INSTRUCTIONS,
        image_data_uri(image_base64),
    )
}

/// Sends the request and returns the upstream status with its raw body.
///
/// Any HTTP response counts as delivered, error statuses included; only
/// transport failures are errors here.
pub async fn send_vision_request(
    client: &Client,
    api_url: &str,
    api_key: &str,
    request_body: &VisionRequestBody,
) -> Result<(StatusCode, String), RelayError> {
    let headers = build_headers(api_key)?;

    let response = client
        .post(api_url)
        .headers(headers)
        .json(request_body)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    Ok((status, body))
}
