use crate::lookup::dispatch::ApiResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to fetch data from API: {0}")]
    Http(#[from] reqwest::Error),

    /// The observed status code did not equal the expected one. The full
    /// response is carried along so the caller can still inspect it.
    #[error("Unexpected HTTP status: expected {expected}, got {actual} (URL: {url})")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        url: String,
        response: Box<ApiResponse>,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Declared-set violations, caught before any request is issued
    #[error("Missing required query parameter '{param}' for endpoint {endpoint}")]
    MissingParam {
        endpoint: &'static str,
        param: &'static str,
    },

    #[error("Unknown query parameter '{param}' for endpoint {endpoint}")]
    UnknownParam {
        endpoint: &'static str,
        param: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl LookupError {
    /// Create a status mismatch error carrying the full response
    pub fn status_mismatch(
        expected: u16,
        actual: u16,
        url: impl Into<String>,
        response: ApiResponse,
    ) -> Self {
        Self::StatusMismatch {
            expected,
            actual,
            url: url.into(),
            response: Box::new(response),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_param(endpoint: &'static str, param: &'static str) -> Self {
        Self::MissingParam { endpoint, param }
    }

    /// Create an unknown parameter error
    pub fn unknown_param(endpoint: &'static str, param: impl Into<String>) -> Self {
        Self::UnknownParam {
            endpoint,
            param: param.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error is a status assertion failure
    pub fn is_status_mismatch(&self) -> bool {
        matches!(self, LookupError::StatusMismatch { .. })
    }

    /// Check if error originated in the transport layer rather than from a
    /// failed status assertion
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LookupError::Http(_)
                | LookupError::NetworkTimeout { .. }
                | LookupError::NetworkConnection { .. }
        )
    }

    /// The response attached to a status mismatch, if any
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            LookupError::StatusMismatch { response, .. } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use reqwest::header::HeaderMap;

    fn mock_response(status: StatusCode) -> ApiResponse {
        ApiResponse {
            url: "http://localhost/json/named.player_info.bam?player_id=493316".to_string(),
            status,
            headers: HeaderMap::new(),
            body: "{}".to_string(),
        }
    }

    #[test]
    fn test_status_mismatch_helper() {
        let error = LookupError::status_mismatch(
            404,
            200,
            "http://localhost/json/named.player_info.bam?player_id=493316",
            mock_response(StatusCode::OK),
        );
        assert!(matches!(error, LookupError::StatusMismatch { .. }));
        assert_eq!(
            error.to_string(),
            "Unexpected HTTP status: expected 404, got 200 \
             (URL: http://localhost/json/named.player_info.bam?player_id=493316)"
        );
    }

    #[test]
    fn test_status_mismatch_carries_response() {
        let error = LookupError::status_mismatch(404, 200, "url", mock_response(StatusCode::OK));
        let response = error.response().expect("response should be attached");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = LookupError::network_timeout("http://lookup-service-prod.mlb.com");
        assert!(matches!(error, LookupError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: http://lookup-service-prod.mlb.com"
        );
    }

    #[test]
    fn test_network_connection_helper() {
        let error = LookupError::network_connection("http://localhost:1", "Connection refused");
        assert!(matches!(error, LookupError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: http://localhost:1 - Connection refused"
        );
    }

    #[test]
    fn test_missing_param_helper() {
        let error = LookupError::missing_param("player_info", "player_id");
        assert_eq!(
            error.to_string(),
            "Missing required query parameter 'player_id' for endpoint player_info"
        );
    }

    #[test]
    fn test_unknown_param_helper() {
        let error = LookupError::unknown_param("player_info", "player_idd");
        assert_eq!(
            error.to_string(),
            "Unknown query parameter 'player_idd' for endpoint player_info"
        );
    }

    #[test]
    fn test_config_error_helper() {
        let error = LookupError::config_error("Invalid configuration");
        assert!(matches!(error, LookupError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_is_status_mismatch() {
        assert!(
            LookupError::status_mismatch(404, 200, "url", mock_response(StatusCode::OK))
                .is_status_mismatch()
        );
        assert!(!LookupError::network_timeout("url").is_status_mismatch());
        assert!(!LookupError::config_error("message").is_status_mismatch());
    }

    #[test]
    fn test_is_transport() {
        // Transport failures
        assert!(LookupError::network_timeout("url").is_transport());
        assert!(LookupError::network_connection("url", "message").is_transport());

        // Everything else
        assert!(
            !LookupError::status_mismatch(404, 200, "url", mock_response(StatusCode::OK))
                .is_transport()
        );
        assert!(!LookupError::missing_param("player_info", "player_id").is_transport());
        assert!(!LookupError::config_error("message").is_transport());
    }

    #[test]
    fn test_response_is_none_for_other_variants() {
        assert!(LookupError::network_timeout("url").response().is_none());
        assert!(
            LookupError::missing_param("player_info", "player_id")
                .response()
                .is_none()
        );
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let error: LookupError = reqwest_error.into();
                assert!(matches!(error, LookupError::Http(_)));
                assert!(error.is_transport());
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }
}
