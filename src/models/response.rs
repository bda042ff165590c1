//! The `{success, data, message}` envelope every API endpoint answers with.

use crate::error::{ApiError, ApiResult};
use serde::Deserialize;

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server handled the request
    #[serde(default)]
    pub success: bool,

    /// Payload, absent on failure
    pub data: Option<T>,

    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`].
    pub fn into_result(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Error en la respuesta".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Other("Missing data in API response".to_string()))
    }

    /// Like [`into_result`](Self::into_result) for endpoints with no payload;
    /// returns the server message.
    pub fn into_message(self) -> ApiResult<Option<String>> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Error en la respuesta".to_string()),
            ));
        }
        Ok(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        n: u32,
    }

    #[test]
    fn test_success_envelope() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success": true, "data": {"n": 3}, "message": "ok"}"#)
                .unwrap();
        assert_eq!(resp.into_result().unwrap(), Payload { n: 3 });
    }

    #[test]
    fn test_rejected_envelope() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success": false, "message": "Archivo vacío"}"#).unwrap();
        match resp.into_result() {
            Err(ApiError::Rejected(msg)) => assert_eq!(msg, "Archivo vacío"),
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_data() {
        let resp: ApiResponse<Payload> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(resp.into_result(), Err(ApiError::Other(_))));
    }

    #[test]
    fn test_into_message() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "Cliente eliminado"}"#).unwrap();
        assert_eq!(resp.into_message().unwrap().as_deref(), Some("Cliente eliminado"));
    }
}
