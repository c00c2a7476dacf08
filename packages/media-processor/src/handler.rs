use tracing::{error, info, warn};

use media_core::{decode_event_key, ImageCodec, MediaError, ObjectStore};

use crate::config::ResizeConfig;
use crate::event::S3Event;
use crate::response::{
    HandlerResponse, ResizeOutcome, MSG_ALREADY_PROCESSED, MSG_ALREADY_SMALL,
    MSG_INTERNAL_ERROR, MSG_MISSING_METADATA,
};

/// オブジェクト作成通知を受けて画像をリサイズするハンドラ
///
/// 1 回の呼び出しで書き込むオブジェクトは最大 1 つ。呼び出し間で状態を持たない。
pub struct ResizeHandler<S, C> {
    store: S,
    codec: C,
    config: ResizeConfig,
}

impl<S, C> ResizeHandler<S, C>
where
    S: ObjectStore,
    C: ImageCodec,
{
    pub fn new(store: S, codec: C, config: ResizeConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// 通知イベントを 1 件処理し、必ずレスポンスを返す
    pub async fn handle(&self, event: S3Event) -> HandlerResponse {
        if event.records.len() > 1 {
            warn!(
                records = event.records.len(),
                "event carries multiple records; only the first is processed"
            );
        }

        let Some(record) = event.records.into_iter().next() else {
            error!("event has no records");
            return bad_key("");
        };

        let raw_key = record.s3.object.key.unwrap_or_default();
        let key = match decode_event_key(&raw_key) {
            Ok(key) => key,
            Err(e) => {
                error!(key = %raw_key, error = %e, "S3 key is undefined");
                return bad_key(&raw_key);
            }
        };

        let Some(bucket) = record.s3.bucket.name.filter(|name| !name.is_empty()) else {
            error!(key = %key, "S3 bucket is undefined");
            return bad_key(&key);
        };

        // 書き込み結果が再び通知されるため、処理済みキーは無視する
        if self.config.layout.is_processed(&key) {
            info!(key = %key, "image is already processed");
            return ResizeOutcome::SkippedAlreadyProcessed.respond(MSG_ALREADY_PROCESSED);
        }

        match self.resize(&bucket, &key).await {
            Ok(response) => response,
            Err(err) => {
                // 詳細はログのみ。レスポンスには含めない
                error!(bucket = %bucket, key = %key, error = %err, details = ?err, "error processing image");
                ResizeOutcome::Failed.respond(MSG_INTERNAL_ERROR)
            }
        }
    }

    async fn resize(&self, bucket: &str, key: &str) -> Result<HandlerResponse, MediaError> {
        info!(bucket = %bucket, key = %key, "fetching original image");
        let original = self.store.get_object(bucket, key).await?;

        let width = self
            .codec
            .read_metadata(&original.body)
            .and_then(|metadata| metadata.width);
        let Some(width) = width else {
            info!(key = %key, "image is lacking necessary metadata");
            return Ok(ResizeOutcome::SkippedMissingMetadata.respond(MSG_MISSING_METADATA));
        };

        let target_width = self.config.target_width;
        if width <= target_width {
            info!(key = %key, width, target_width, "image is already the proper size");
            return Ok(ResizeOutcome::SkippedAlreadySmall.respond(MSG_ALREADY_SMALL));
        }

        info!(key = %key, width, target_width, "resizing image");
        let resized = self.codec.resize_to_width(&original.body, target_width)?;

        let resized_key = self.config.layout.derive_resized_key(key)?;
        let content_type = original
            .content_type
            .as_deref()
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or(self.config.default_content_type.as_str());

        self.store
            .put_object(bucket, &resized_key, resized, content_type)
            .await?;

        info!(bucket = %bucket, key = %resized_key, content_type = %content_type, "resized image has been uploaded");
        Ok(ResizeOutcome::Succeeded.respond(format!(
            "Resized Image {resized_key} has been uploaded"
        )))
    }
}

fn bad_key(key: &str) -> HandlerResponse {
    ResizeOutcome::RejectedBadKey.respond(format!("S3 Key {key} is undefined."))
}
