//! S3-backed object store

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use media_core::{ObjectStore, StorageError, StoredObject};
use tracing::{debug, error, info};

use crate::config::ResizeConfig;

/// S3 クライアント
///
/// プロセス起動時に一度だけ作成し、すべての呼び出しで再利用する。
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    max_input_size: u64,
}

impl S3ObjectStore {
    pub fn new(client: Client, max_input_size: u64) -> Self {
        Self {
            client,
            max_input_size,
        }
    }

    /// 設定のリージョンで AWS SDK を初期化する
    ///
    /// タイムアウトとリトライは SDK のデフォルトに従う
    pub async fn from_config(config: &ResizeConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        info!(
            region = %config.region,
            max_input_size = config.max_input_size,
            "initialized S3 client"
        );

        Self::new(Client::new(&sdk_config), config.max_input_size)
    }

    fn check_size(&self, size: u64) -> Result<(), StorageError> {
        if size > self.max_input_size {
            return Err(StorageError::TooLarge {
                size,
                max: self.max_input_size,
            });
        }
        Ok(())
    }
}

fn map_get_error(bucket: &str, key: &str, err: SdkError<GetObjectError>) -> StorageError {
    if let SdkError::ServiceError(ref service_err) = err {
        if matches!(service_err.err(), GetObjectError::NoSuchKey(_)) {
            return StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            };
        }
        if service_err.raw().status().as_u16() == 403 {
            error!(bucket = %bucket, key = %key, "access denied by S3");
            return StorageError::Forbidden;
        }
    }

    StorageError::Internal(DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError> {
        debug!(bucket = %bucket, key = %key, "getting object");

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_error(bucket, key, e))?;

        // 読み込み前に Content-Length で確認
        if let Some(length) = output.content_length().and_then(|l| u64::try_from(l).ok()) {
            self.check_size(length)?;
        }

        let content_type = output.content_type().map(str::to_string);

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Internal(format!("failed to read object body: {e}")))?
            .into_bytes();

        // 読み込み後にもサイズを確認
        self.check_size(data.len() as u64)?;

        Ok(StoredObject {
            body: data,
            content_type,
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        debug!(bucket = %bucket, key = %key, size = body.len(), "putting object");

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Internal(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
