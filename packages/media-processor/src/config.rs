//! Environment configuration for the resize handler

use std::str::FromStr;

use media_core::{
    validate_params, KeyLayout, DEFAULT_CONTENT_TYPE, DEFAULT_DESTINATION_PREFIX,
    DEFAULT_PROCESSED_MARKER, DEFAULT_QUALITY, DEFAULT_SOURCE_PREFIX, DEFAULT_TARGET_WIDTH,
    MAX_INPUT_SIZE,
};
use thiserror::Error;

/// リージョン未指定時のデフォルト
pub const DEFAULT_REGION: &str = "us-east-1";

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is invalid ({value:?}): {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// リサイズ処理の設定（起動時に一度だけ読み込む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub target_width: u32,
    pub layout: KeyLayout,
    pub default_content_type: String,
    pub region: String,
    pub max_input_size: u64,
    pub quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            layout: KeyLayout::default(),
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            region: DEFAULT_REGION.to_string(),
            max_input_size: MAX_INPUT_SIZE,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ResizeConfig {
    /// 環境変数から ResizeConfig を作成する
    ///
    /// 任意の環境変数（未設定ならデフォルト値）:
    /// - TARGET_WIDTH
    /// - SOURCE_PREFIX
    /// - DESTINATION_PREFIX
    /// - PROCESSED_MARKER
    /// - DEFAULT_CONTENT_TYPE
    /// - AWS_REGION
    /// - MAX_INPUT_BYTES
    /// - JPEG_QUALITY
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意のルックアップ関数から ResizeConfig を作成する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let target_width = parse_var(&get, "TARGET_WIDTH", DEFAULT_TARGET_WIDTH)?;
        let quality = parse_var(&get, "JPEG_QUALITY", DEFAULT_QUALITY)?;
        validate_params(Some(target_width), Some(quality)).map_err(|e| ConfigError::Invalid {
            name: "TARGET_WIDTH/JPEG_QUALITY",
            value: format!("{target_width}/{quality}"),
            reason: e.to_string(),
        })?;

        let max_input_size = parse_var(&get, "MAX_INPUT_BYTES", MAX_INPUT_SIZE)?;
        if max_input_size == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_INPUT_BYTES",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        // 空文字は上で未設定扱いになるため、マーカーは常に空でない
        let layout = KeyLayout::new(
            get("SOURCE_PREFIX").unwrap_or_else(|| DEFAULT_SOURCE_PREFIX.to_string()),
            get("DESTINATION_PREFIX").unwrap_or_else(|| DEFAULT_DESTINATION_PREFIX.to_string()),
            get("PROCESSED_MARKER").unwrap_or_else(|| DEFAULT_PROCESSED_MARKER.to_string()),
        );

        Ok(Self {
            target_width,
            layout,
            default_content_type: get("DEFAULT_CONTENT_TYPE")
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            max_input_size,
            quality,
        })
    }
}

fn parse_var<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ResizeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ResizeConfig::default());
        assert_eq!(config.target_width, 300);
        assert_eq!(config.layout.source_prefix, "original-images/");
        assert_eq!(config.layout.destination_prefix, "resized-images/");
        assert_eq!(config.layout.marker, "_resized");
        assert_eq!(config.default_content_type, "image/jpeg");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_overrides() {
        let config = ResizeConfig::from_lookup(lookup(&[
            ("TARGET_WIDTH", "640"),
            ("SOURCE_PREFIX", "uploads/"),
            ("DESTINATION_PREFIX", "thumbs/"),
            ("PROCESSED_MARKER", "_thumb"),
            ("AWS_REGION", "ap-northeast-1"),
            ("MAX_INPUT_BYTES", "1024"),
            ("JPEG_QUALITY", "90"),
        ]))
        .unwrap();

        assert_eq!(config.target_width, 640);
        assert_eq!(config.layout.source_prefix, "uploads/");
        assert_eq!(config.layout.destination_prefix, "thumbs/");
        assert_eq!(config.layout.marker, "_thumb");
        assert_eq!(config.region, "ap-northeast-1");
        assert_eq!(config.max_input_size, 1024);
        assert_eq!(config.quality, 90);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            ResizeConfig::from_lookup(lookup(&[("PROCESSED_MARKER", "  "), ("TARGET_WIDTH", "")]))
                .unwrap();
        assert_eq!(config.layout.marker, "_resized");
        assert_eq!(config.target_width, 300);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(ResizeConfig::from_lookup(lookup(&[("TARGET_WIDTH", "wide")])).is_err());
        assert!(ResizeConfig::from_lookup(lookup(&[("TARGET_WIDTH", "0")])).is_err());
        assert!(ResizeConfig::from_lookup(lookup(&[("TARGET_WIDTH", "10000")])).is_err());
        assert!(ResizeConfig::from_lookup(lookup(&[("JPEG_QUALITY", "0")])).is_err());
        assert!(ResizeConfig::from_lookup(lookup(&[("MAX_INPUT_BYTES", "0")])).is_err());
    }
}
