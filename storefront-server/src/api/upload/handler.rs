//! Image Upload Handler
//!
//! Supports PNG, JPEG, WebP and GIF input; everything is stored as JPEG.
//! Keys are content hashes, so uploading the same image twice yields the
//! same URL.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::Path;

use crate::core::ServerState;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::response::UploadResponse;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// JPEG quality for stored images
const JPEG_QUALITY: u8 = 85;

const STORED_CONTENT_TYPE: &str = "image/jpeg";

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Storage key for processed image bytes
fn storage_key(data: &[u8]) -> String {
    format!("images/{}.jpg", calculate_hash(data))
}

/// Lowercase extension from the file name, else from the declared content type
fn file_extension(filename: Option<&str>, content_type: Option<&str>) -> Option<String> {
    let from_name = filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    from_name.or_else(|| {
        content_type
            .and_then(mime_guess::get_mime_extensions_str)
            .and_then(|exts| {
                exts.iter()
                    .find(|ext| SUPPORTED_FORMATS.contains(*ext))
                    .or_else(|| exts.first())
            })
            .map(|ext| ext.to_string())
    })
}

fn check_format(ext: Option<&str>) -> AppResult<()> {
    match ext {
        Some(ext) if SUPPORTED_FORMATS.contains(&ext) => Ok(()),
        Some(ext) => Err(AppError::with_message(
            ErrorCode::UploadUnsupportedFormat,
            format!(
                "Unsupported file format '{ext}'. Supported: {}",
                SUPPORTED_FORMATS.join(", ")
            ),
        )
        .with_field("file", "unsupported format")),
        None => Err(AppError::new(ErrorCode::UploadUnsupportedFormat)
            .with_field("file", "file type could not be determined")),
    }
}

fn too_large(max: usize) -> AppError {
    AppError::with_message(
        ErrorCode::UploadTooLarge,
        format!("File too large. Maximum size is {max} bytes"),
    )
    .with_field("file", format!("must be at most {max} bytes"))
}

fn multipart_error(err: MultipartError, max: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(max);
    }
    AppError::with_message(
        ErrorCode::InvalidRequest,
        format!("Invalid multipart request: {}", err.body_text()),
    )
}

/// Decode and re-encode as JPEG
fn process_image(data: &[u8]) -> AppResult<Vec<u8>> {
    let img = image::load_from_memory(data).map_err(|e| {
        AppError::with_message(ErrorCode::UploadInvalidImage, format!("Invalid image: {e}"))
            .with_field("file", "not a valid image")
    })?;

    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buffer), JPEG_QUALITY);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| AppError::internal(format!("Failed to encode image: {e}")))?;
    Ok(buffer)
}

/// POST /api/upload
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let max = state.config.max_upload_bytes;

    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| multipart_error(e, max))?;
        file = Some((filename, content_type, data));
        break;
    }

    let (filename, content_type, data) = file.ok_or_else(|| {
        AppError::new(ErrorCode::UploadMissingFile).with_field("file", "field 'file' is required")
    })?;
    if data.is_empty() {
        return Err(AppError::new(ErrorCode::UploadMissingFile).with_field("file", "file is empty"));
    }
    if data.len() > max {
        return Err(too_large(max));
    }

    let ext = file_extension(filename.as_deref(), content_type.as_deref());
    check_format(ext.as_deref())?;

    let processed = tokio::task::spawn_blocking(move || process_image(&data))
        .await
        .map_err(|e| AppError::internal(format!("Image task failed: {e}")))??;

    let key = storage_key(&processed);
    let size = processed.len() as u64;
    let url = state.storage.put(&key, processed, STORED_CONTENT_TYPE).await?;

    tracing::info!(
        original_name = ?filename,
        key = %key,
        size = size,
        backend = state.storage.name(),
        "Image uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url,
            key,
            size,
            content_type: STORED_CONTENT_TYPE.to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 120, 40]));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_extension_from_name_or_content_type() {
        assert_eq!(file_extension(Some("Photo.PNG"), None).as_deref(), Some("png"));
        assert_eq!(
            file_extension(Some("blob"), Some("image/webp")).as_deref(),
            Some("webp")
        );
        assert_eq!(file_extension(None, None), None);
    }

    #[test]
    fn test_check_format() {
        assert!(check_format(Some("gif")).is_ok());
        let err = check_format(Some("svg")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadUnsupportedFormat);
        assert!(check_format(None).is_err());
    }

    #[test]
    fn test_process_image_outputs_jpeg() {
        let jpeg = process_image(&png_bytes()).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_process_image_rejects_text() {
        let err = process_image(b"definitely not an image").unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadInvalidImage);
        assert_eq!(err.details.unwrap()[0].field, "file");
    }

    #[test]
    fn test_storage_key_is_content_hash() {
        let key = storage_key(b"abc");
        assert_eq!(
            key,
            "images/ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.jpg"
        );
    }
}
