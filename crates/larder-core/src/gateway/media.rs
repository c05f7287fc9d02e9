//! Photo and audio payload preparation.

use std::io::{Cursor, Write as _};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, ImageReader};
use tempfile::NamedTempFile;

/// Input formats accepted for photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Decode a photo, re-encode it as JPEG and wrap it in a `data:` URI.
///
/// The format is detected from the bytes, not from a file name.
pub fn jpeg_data_uri(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("failed to read image: {e}"))?;

    let format = reader
        .format()
        .ok_or_else(|| "could not detect image format".to_string())?;
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "unsupported image format: {format:?}. Allowed: JPEG, PNG, GIF, WebP"
        ));
    }

    let img = reader
        .decode()
        .map_err(|e| format!("failed to decode image: {e}"))?;

    // JPEG has no alpha channel.
    let mut buf = Cursor::new(Vec::new());
    img.to_rgb8()
        .write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| format!("failed to encode image: {e}"))?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(buf.into_inner())
    ))
}

/// Write audio bytes to a temporary file named with `extension`.
///
/// The file is deleted when the returned handle is dropped.
pub fn write_temp_audio(audio: &[u8], extension: &str) -> std::io::Result<NamedTempFile> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut file = tempfile::Builder::new()
        .prefix("larder-audio-")
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(audio)?;
    file.flush()?;
    Ok(file)
}
