use bytes::Bytes;

use media_core::{
    calculate_width_fit, decode_image, encode_image, read_metadata, resize_image,
    validate_params, ImageCodec, ImageMetadata, TransformError, TransformParams,
};

/// image + fast_image_resize によるコーデック
#[derive(Debug, Clone, Copy)]
pub struct RasterCodec {
    quality: u8,
}

impl RasterCodec {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for RasterCodec {
    fn default() -> Self {
        Self::new(TransformParams::default().quality)
    }
}

impl ImageCodec for RasterCodec {
    fn read_metadata(&self, data: &[u8]) -> Option<ImageMetadata> {
        read_metadata(data)
    }

    fn resize_to_width(&self, data: &Bytes, target_width: u32) -> Result<Bytes, TransformError> {
        transform(data, &TransformParams::new(target_width, Some(self.quality)))
    }
}

/// 画像バイト列を幅指定でリサイズし、元と同じフォーマットでエンコードする。
///
/// 高さはアスペクト比を維持して導出する。
/// メタデータ (EXIF/XMP) はデコード・エンコードサイクルで削除される。
pub fn transform(input: &Bytes, params: &TransformParams) -> Result<Bytes, TransformError> {
    validate_params(Some(params.target_width), Some(params.quality))?;

    let (img, source_format) = decode_image(input)?;

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = calculate_width_fit(src_w, src_h, params.target_width);

    let resized = if dst_w != src_w || dst_h != src_h {
        resize_image(&img, dst_w, dst_h)?
    } else {
        img
    };

    let output_bytes = encode_image(&resized, source_format, params.quality)?;

    Ok(Bytes::from(output_bytes))
}
