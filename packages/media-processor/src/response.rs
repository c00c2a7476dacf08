//! Handler outcomes and the response returned to the invoking platform

use std::collections::BTreeMap;

use serde::Serialize;

pub const MSG_ALREADY_PROCESSED: &str = "Image is already processed. Exiting.";
pub const MSG_MISSING_METADATA: &str = "Image is lacking necessary metadata";
pub const MSG_ALREADY_SMALL: &str = "Image is already the proper size.";
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

/// 1 回の呼び出しの最終結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    RejectedBadKey,
    SkippedAlreadyProcessed,
    SkippedMissingMetadata,
    SkippedAlreadySmall,
    Succeeded,
    Failed,
}

impl ResizeOutcome {
    /// スキップ系も互換性のため 4xx を返す
    pub const fn status_code(self) -> u16 {
        match self {
            Self::RejectedBadKey | Self::SkippedMissingMetadata | Self::SkippedAlreadySmall => 400,
            Self::SkippedAlreadyProcessed => 204,
            Self::Succeeded => 200,
            Self::Failed => 500,
        }
    }

    /// 本文を `error` に入れるか `message` に入れるか
    const fn body_field(self) -> &'static str {
        match self {
            Self::RejectedBadKey | Self::Failed => "error",
            _ => "message",
        }
    }

    pub fn respond(self, text: impl Into<String>) -> HandlerResponse {
        let mut body = serde_json::Map::new();
        body.insert(
            self.body_field().to_string(),
            serde_json::Value::String(text.into()),
        );

        HandlerResponse {
            outcome: self,
            status_code: self.status_code(),
            body: serde_json::Value::Object(body).to_string(),
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    #[serde(skip)]
    pub outcome: ResizeOutcome,
    pub status_code: u16,
    /// JSON 文字列
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ResizeOutcome::RejectedBadKey.status_code(), 400);
        assert_eq!(ResizeOutcome::SkippedAlreadyProcessed.status_code(), 204);
        assert_eq!(ResizeOutcome::SkippedMissingMetadata.status_code(), 400);
        assert_eq!(ResizeOutcome::SkippedAlreadySmall.status_code(), 400);
        assert_eq!(ResizeOutcome::Succeeded.status_code(), 200);
        assert_eq!(ResizeOutcome::Failed.status_code(), 500);
    }

    #[test]
    fn test_error_body() {
        let response = ResizeOutcome::Failed.respond(MSG_INTERNAL_ERROR);
        assert_eq!(response.body, r#"{"error":"Internal Server Error"}"#);
    }

    #[test]
    fn test_message_body() {
        let response = ResizeOutcome::SkippedAlreadySmall.respond(MSG_ALREADY_SMALL);
        assert_eq!(
            response.body,
            r#"{"message":"Image is already the proper size."}"#
        );
    }

    #[test]
    fn test_serialized_shape() {
        let response = ResizeOutcome::Succeeded.respond("done");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], r#"{"message":"done"}"#);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert!(value.get("outcome").is_none());
    }
}
