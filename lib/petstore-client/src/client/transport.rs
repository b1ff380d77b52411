use std::future::Future;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::content::{is_json_mime, is_xml_mime};
use super::error::ApiClientError;
use super::request::{RequestDescriptor, ReturnType};

/// Sends [`RequestDescriptor`]s and turns responses into typed values.
///
/// The endpoint clients ([`UserApi`](crate::UserApi), [`DefaultApi`](crate::DefaultApi))
/// only bind parameters; serialization, authentication, network I/O and
/// deserialization into the declared [`ReturnType`] all belong to the transport.
/// [`ApiClient`](crate::ApiClient) is the HTTP implementation.
pub trait Transport: Send + Sync {
    /// Dispatches one request.
    ///
    /// Implementations send exactly one request per call and complete the
    /// returned future exactly once.
    fn call<B, D>(
        &self,
        request: RequestDescriptor<B>,
    ) -> impl Future<Output = Result<ApiResponse<D>, ApiClientError>> + Send
    where
        B: Serialize + Send + Sync + 'static,
        D: DeserializeOwned + Send + 'static;
}

impl<T> Transport for &T
where
    T: Transport,
{
    fn call<B, D>(
        &self,
        request: RequestDescriptor<B>,
    ) -> impl Future<Output = Result<ApiResponse<D>, ApiClientError>> + Send
    where
        B: Serialize + Send + Sync + 'static,
        D: DeserializeOwned + Send + 'static,
    {
        (**self).call(request)
    }
}

impl<T> Transport for std::sync::Arc<T>
where
    T: Transport,
{
    fn call<B, D>(
        &self,
        request: RequestDescriptor<B>,
    ) -> impl Future<Output = Result<ApiResponse<D>, ApiClientError>> + Send
    where
        B: Serialize + Send + Sync + 'static,
        D: DeserializeOwned + Send + 'static,
    {
        (**self).call(request)
    }
}

/// A decoded response: the data together with the raw response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<D> {
    status: StatusCode,
    headers: HeaderMap,
    data: D,
}

impl<D> ApiResponse<D> {
    /// Assembles a response.
    pub fn new(status: StatusCode, headers: HeaderMap, data: D) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Decoded data.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Takes the decoded data.
    pub fn into_data(self) -> D {
        self.data
    }

    /// Splits into status, headers and data.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, D) {
        (self.status, self.headers, self.data)
    }
}

/// Decodes a response body into `D`, driven by the declared return type and
/// the response content type.
///
/// - [`ReturnType::None`] and empty bodies decode from JSON `null`
/// - JSON and XML bodies are parsed
/// - [`ReturnType::STRING`] accepts any other body as UTF-8 text
///
/// # Errors
///
/// Fails when the body does not match `D` or the content type is not supported.
pub fn decode_response<D>(
    return_type: &ReturnType,
    content_type: Option<&str>,
    body: &Bytes,
) -> Result<D, ApiClientError>
where
    D: DeserializeOwned,
{
    if *return_type == ReturnType::None || body.is_empty() {
        debug!(%return_type, "no body to decode");
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }

    match content_type {
        Some(content_type) if is_json_mime(content_type) => {
            let deserializer = &mut serde_json::Deserializer::from_slice(body);
            serde_path_to_error::deserialize(deserializer).map_err(|err| {
                ApiClientError::JsonError {
                    path: err.path().to_string(),
                    error: err.into_inner(),
                    body: String::from_utf8_lossy(body).into_owned(),
                }
            })
        }
        Some(content_type) if is_xml_mime(content_type) => serde_xml_rs::from_reader(body.as_ref())
            .map_err(|err| ApiClientError::XmlError {
                message: err.to_string(),
                body: String::from_utf8_lossy(body).into_owned(),
            }),
        _ if *return_type == ReturnType::STRING => {
            let text = std::str::from_utf8(body).map_err(|err| ApiClientError::InvalidText {
                message: err.to_string(),
            })?;
            Ok(serde_json::from_value(serde_json::Value::String(
                text.to_owned(),
            ))?)
        }
        content_type => Err(ApiClientError::UnsupportedResponse {
            content_type: content_type.unwrap_or("<none>").to_string(),
            return_type: return_type.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn should_decode_unit_when_nothing_expected() {
        let body = Bytes::from_static(b"ignored");

        let result: Result<(), _> = decode_response(&ReturnType::None, Some("text/plain"), &body);

        assert!(result.is_ok());
    }

    #[test]
    fn should_decode_json_model() {
        let body = Bytes::from_static(br#"{"id":1,"username":"user1"}"#);

        let user: User = decode_response(
            &ReturnType::model::<User>(),
            Some("application/json"),
            &body,
        )
        .expect("valid user");

        assert_eq!(user.id, Some(1));
        assert_eq!(user.username.as_deref(), Some("user1"));
    }

    #[test]
    fn should_decode_xml_model() {
        let body = Bytes::from_static(b"<User><id>1</id><username>user1</username></User>");

        let user: User =
            decode_response(&ReturnType::model::<User>(), Some("application/xml"), &body)
                .expect("valid user");

        assert_eq!(user.username.as_deref(), Some("user1"));
    }

    #[test]
    fn should_decode_plain_text_string() {
        let body = Bytes::from_static(b"logged in user session:1234");

        let text: String = decode_response(&ReturnType::STRING, Some("text/plain"), &body)
            .expect("a string");

        assert_eq!(text, "logged in user session:1234");
    }

    #[test]
    fn should_reject_invalid_utf8_text() {
        let body = Bytes::from_static(b"logged in \xff\xfe");

        let result: Result<String, _> =
            decode_response(&ReturnType::STRING, Some("text/plain"), &body);

        assert!(matches!(result, Err(ApiClientError::InvalidText { .. })));
    }

    #[test]
    fn should_report_json_error_path() {
        let body = Bytes::from_static(br#"{"id":"not-a-number"}"#);

        let result: Result<User, _> = decode_response(
            &ReturnType::model::<User>(),
            Some("application/json"),
            &body,
        );

        match result {
            Err(ApiClientError::JsonError { path, .. }) => assert_eq!(path, "id"),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_unsupported_content_type() {
        let body = Bytes::from_static(b"\x00\x01");

        let result: Result<User, _> = decode_response(
            &ReturnType::model::<User>(),
            Some("application/octet-stream"),
            &body,
        );

        insta::assert_snapshot!(
            result.expect_err("unsupported"),
            @"Cannot decode a 'application/octet-stream' response into User"
        );
    }
}
