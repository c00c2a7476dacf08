use crate::constants::{DEFAULT_QUALITY, DEFAULT_TARGET_WIDTH};

/// 変換パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParams {
    pub target_width: u32,
    pub quality: u8,
}

impl TransformParams {
    pub fn new(target_width: u32, quality: Option<u8>) -> Self {
        Self {
            target_width,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        }
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_WIDTH, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_params_default_quality() {
        let params = TransformParams::new(300, None);
        assert_eq!(params.quality, DEFAULT_QUALITY);
    }

    #[test]
    fn test_transform_params_default() {
        let params = TransformParams::default();
        assert_eq!(params.target_width, DEFAULT_TARGET_WIDTH);
        assert_eq!(params.quality, DEFAULT_QUALITY);
    }
}
