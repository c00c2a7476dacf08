#[cfg(any(test, feature = "test-utils"))]
mod memory;

use async_trait::async_trait;
use bytes::Bytes;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryObjectStore;
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;

/// ストレージから取得したオブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
}

/// オブジェクトストレージへの読み書き
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// オブジェクトの全内容と Content-Type を取得する
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError>;

    /// オブジェクトを書き込む
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
