/// 画像の最大寸法（幅・高さ）
pub const MAX_DIMENSION: u32 = 4096;

/// 画像の最大ピクセル数（1GP = 実質無制限、極端な攻撃のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// デフォルト品質（1-100）
pub const DEFAULT_QUALITY: u8 = 80;

/// リサイズ後の幅（px）。この幅以下の画像はリサイズしない
pub const DEFAULT_TARGET_WIDTH: u32 = 300;

/// 元画像が置かれるパスセグメント
pub const DEFAULT_SOURCE_PREFIX: &str = "original-images/";

/// リサイズ済み画像を書き込むパスセグメント
pub const DEFAULT_DESTINATION_PREFIX: &str = "resized-images/";

/// 処理済みキーに挿入されるマーカー
pub const DEFAULT_PROCESSED_MARKER: &str = "_resized";

/// 元オブジェクトに Content-Type がない場合に使う値
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// 取得するオブジェクトの最大サイズ（50MiB）
pub const MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024;
