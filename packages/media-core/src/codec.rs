use bytes::Bytes;

use crate::errors::TransformError;
use crate::transform::ImageMetadata;

/// 画像コーデック
///
/// メタデータの読み取りと幅指定のリサイズを提供する。
pub trait ImageCodec: Send + Sync {
    /// 画像として認識できない場合は None
    fn read_metadata(&self, data: &[u8]) -> Option<ImageMetadata>;

    /// 幅を `target_width` に合わせてリサイズし、元と同じフォーマットでエンコードする
    fn resize_to_width(&self, data: &Bytes, target_width: u32) -> Result<Bytes, TransformError>;
}
