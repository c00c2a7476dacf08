use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// 画像のメタデータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub format: ImageFormat,
    /// 幅が 0 や読み取れない場合は None
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// バイト列からフォーマットと寸法を読み取る（ピクセルはデコードしない）
///
/// 画像として認識できない場合は None を返す。
pub fn read_metadata(data: &[u8]) -> Option<ImageMetadata> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    let format = reader.format()?;

    let (width, height) = match reader.into_dimensions() {
        Ok((w, h)) => (Some(w).filter(|w| *w > 0), Some(h).filter(|h| *h > 0)),
        Err(_) => (None, None),
    };

    Some(ImageMetadata {
        format,
        width,
        height,
    })
}

/// 画像をデコードし、DynamicImage と元のフォーマットを返す
pub fn decode_image(data: &[u8]) -> Result<(DynamicImage, ImageFormat), TransformError> {
    let metadata = read_metadata(data).ok_or_else(|| {
        TransformError::ProcessingFailed("unrecognized image format".to_string())
    })?;

    // デコード前に総ピクセル数を検証し、メモリ枯渇を防ぐ
    if let (Some(width), Some(height)) = (metadata.width, metadata.height)
        && width as u64 * height as u64 > MAX_PIXELS
    {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }

    let img = ImageReader::with_format(Cursor::new(data), metadata.format)
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))?;

    Ok((img, metadata.format))
}
