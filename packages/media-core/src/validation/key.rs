use crate::constants::{DEFAULT_DESTINATION_PREFIX, DEFAULT_PROCESSED_MARKER, DEFAULT_SOURCE_PREFIX};
use crate::errors::KeyError;

/// 通知イベントに含まれるオブジェクトキーをデコードする
///
/// S3 の通知ではスペースが `+` に、その他の文字がパーセントエンコードされている。
/// デコード後に空（空白のみを含む）になるキーはエラーとする。
pub fn decode_event_key(raw: &str) -> Result<String, KeyError> {
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded)
        .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;

    if decoded.trim().is_empty() {
        return Err(KeyError::Empty);
    }

    Ok(decoded.into_owned())
}

/// 元画像キーとリサイズ済みキーの対応規則
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    pub source_prefix: String,
    pub destination_prefix: String,
    pub marker: String,
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self {
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
            destination_prefix: DEFAULT_DESTINATION_PREFIX.to_string(),
            marker: DEFAULT_PROCESSED_MARKER.to_string(),
        }
    }
}

impl KeyLayout {
    pub fn new(source_prefix: String, destination_prefix: String, marker: String) -> Self {
        Self {
            source_prefix,
            destination_prefix,
            marker,
        }
    }

    /// キーが処理済みマーカーを含むか
    pub fn is_processed(&self, key: &str) -> bool {
        key.contains(&self.marker)
    }

    /// リサイズ済み画像の書き込み先キーを導出する
    ///
    /// 1. 最初の `source_prefix` を `destination_prefix` に置換
    /// 2. 最初の `.` の直前にマーカーを挿入
    ///
    /// 導出キーがマーカーを含まない、または元キーと同じ場合は、
    /// 書き込みが再びトリガーされて無限ループになるためエラーを返す。
    pub fn derive_resized_key(&self, key: &str) -> Result<String, KeyError> {
        let derived = key
            .replacen(&self.source_prefix, &self.destination_prefix, 1)
            .replacen('.', &format!("{}.", self.marker), 1);

        if derived == key || !self.is_processed(&derived) {
            return Err(KeyError::UnguardedDerivedKey {
                source_key: key.to_string(),
                derived,
            });
        }

        Ok(derived)
    }
}
