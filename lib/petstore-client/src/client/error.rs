use super::auth::AuthenticationError;

/// Errors that can occur when building or sending a Petstore API call.
///
/// The endpoint layer only ever originates [`ApiClientError::InvalidArgument`];
/// every other variant comes from the transport and is surfaced unmodified.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// A required operation parameter was absent.
    ///
    /// Raised before any request is dispatched.
    #[display("Missing the required parameter '{parameter}' when calling {operation}")]
    #[from(skip)]
    InvalidArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
        /// Identifier of the operation being called.
        operation: &'static str,
    },

    /// HTTP client error from the underlying reqwest library.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error for request bodies or parameter values.
    JsonValueError(serde_json::Error),

    /// Query or form parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Authentication data could not be turned into a header.
    Authentication(AuthenticationError),

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Parameter value cannot be converted to a string.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// Specific error message describing the conversion failure.
        message: String,
        /// The value that failed to convert.
        value: serde_json::Value,
    },

    /// Request body serialization failed.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },

    /// JSON response deserialization failure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// Path inside the document where decoding failed.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// XML response deserialization failure.
    #[display("Failed to deserialize XML: {message}\n{body}")]
    #[from(skip)]
    XmlError {
        /// Description of the XML parsing failure.
        message: String,
        /// The response body that failed to parse.
        body: String,
    },

    /// Text response body is not valid UTF-8.
    #[display("Response body is not valid UTF-8: {message}")]
    #[from(skip)]
    InvalidText {
        /// Description of the decoding failure.
        message: String,
    },

    /// Response body could not be decoded into the declared return type.
    #[display("Cannot decode a '{content_type}' response into {return_type}")]
    #[from(skip)]
    UnsupportedResponse {
        /// The response content type.
        content_type: String,
        /// The declared return type.
        return_type: String,
    },

    /// Server returned a status code outside the 2xx range.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The HTTP status code received.
        status_code: u16,
        /// The response body, truncated.
        body: String,
    },
}

impl ApiClientError {
    /// Returns `true` when this error was raised by argument validation, before dispatch.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ApiClientError>();
        assert_sync::<ApiClientError>();
    }

    #[test]
    fn should_display_invalid_argument() {
        let error = ApiClientError::InvalidArgument {
            parameter: "username",
            operation: "deleteUser",
        };

        insta::assert_snapshot!(error, @"Missing the required parameter 'username' when calling deleteUser");
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn should_display_unexpected_status() {
        let error = ApiClientError::UnexpectedStatusCode {
            status_code: 404,
            body: "User not found".to_string(),
        };

        insta::assert_snapshot!(error, @"Unexpected status code 404: User not found");
        assert!(!error.is_invalid_argument());
    }
}
