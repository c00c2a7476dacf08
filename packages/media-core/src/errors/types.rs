use thiserror::Error;

/// メディア処理の統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// オブジェクトキーのエラー
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key is empty")]
    Empty,

    #[error("invalid URL encoding in key: {0}")]
    InvalidEncoding(String),

    /// 導出キーが再帰ガードを満たさない（マーカーなし、または元キーと同一）
    #[error("derived key {derived} for {source_key} would not be skipped on re-trigger")]
    UnguardedDerivedKey { source_key: String, derived: String },
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("access denied")]
    Forbidden,

    #[error("object too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("storage error: {0}")]
    Internal(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
