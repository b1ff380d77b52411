use headers::{ContentType, HeaderMapExt};
use http::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Body, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::content::{encode_body, select_header_accept, select_header_content_type};
use super::transport::decode_response;
use super::{ApiClient, ApiClientError, ApiResponse, RequestDescriptor};

const BODY_MAX_LENGTH: usize = 1024;

impl ApiClient {
    pub(super) async fn execute<B, D>(
        &self,
        request: RequestDescriptor<B>,
    ) -> Result<ApiResponse<D>, ApiClientError>
    where
        B: Serialize,
        D: DeserializeOwned,
    {
        let http_request = self.build_request(&request)?;
        let operation = request.operation();
        let return_type = request.into_return_type();

        debug!(
            operation,
            method = %http_request.method(),
            url = %http_request.url(),
            "sending..."
        );
        let response = self.client.execute(http_request).await?;
        debug!(operation, status = %response.status(), "...receiving");

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map(truncate_body)
                .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
            return Err(ApiClientError::UnexpectedStatusCode {
                status_code: status.as_u16(),
                body,
            });
        }

        let headers = response.headers().clone();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;
        let data = decode_response(&return_type, content_type.as_deref(), &body)?;

        Ok(ApiResponse::new(status, headers, data))
    }

    pub(super) fn build_url<B>(&self, request: &RequestDescriptor<B>) -> Result<Url, ApiClientError> {
        let path = request.resolved_path()?;
        let base_uri = self.base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !request.query().is_empty() {
            let query_string = request.query().to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    pub(super) fn build_request<B>(
        &self,
        request: &RequestDescriptor<B>,
    ) -> Result<Request, ApiClientError>
    where
        B: Serialize,
    {
        let url = self.build_url(request)?;
        let mut http_request = Request::new(request.method().clone(), url);
        let req_headers = http_request.headers_mut();

        if let Some(accept) = select_header_accept(request.accepts()) {
            req_headers.insert(ACCEPT, HeaderValue::from_str(&accept)?);
        }

        for name in request.auth_names() {
            if let Some(authentication) = self.authentications.get(*name) {
                let (header_name, header_value) = authentication.to_header()?;
                req_headers.insert(header_name, header_value);
            } else {
                warn!(
                    scheme = *name,
                    operation = request.operation(),
                    "no authentication registered, skipping"
                );
            }
        }

        let headers = self.default_headers.clone().merge(request.headers().clone());
        for (name, value) in headers.to_http_headers()? {
            req_headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(&value)?,
            );
        }

        let body = if request.form().is_empty() {
            let content_type = select_header_content_type(request.content_types());
            let data = encode_body(request.body(), &content_type)?;
            if data.is_some() {
                req_headers.insert(CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
            }
            data.map(Body::from)
        } else {
            if !request.body().is_none() {
                warn!(
                    operation = request.operation(),
                    "form parameters present, request body ignored"
                );
            }
            req_headers.typed_insert(ContentType::form_url_encoded());
            Some(Body::from(request.form().to_form_string()?))
        };
        *http_request.body_mut() = body;

        Ok(http_request)
    }
}

fn truncate_body(mut text: String) -> String {
    if text.len() > BODY_MAX_LENGTH {
        let mut end = BODY_MAX_LENGTH;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        text.push_str("... (truncated)");
    }
    text
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::client::{Authentication, CallForm, CallHeaders, CallPath, CallQuery, RequestBody, ReturnType};
    use crate::model::User;

    fn descriptor(method: Method, path: CallPath) -> RequestDescriptor<User> {
        RequestDescriptor {
            operation: "sample",
            method,
            path,
            query: CallQuery::new(),
            headers: CallHeaders::new(),
            form: CallForm::new(),
            body: RequestBody::None,
            content_types: Vec::new(),
            accepts: &[],
            auth_names: Vec::new(),
            return_type: ReturnType::None,
        }
    }

    fn client() -> ApiClient {
        ApiClient::builder()
            .with_host("localhost")
            .with_port(8080)
            .build()
            .expect("valid client")
    }

    fn body_text(request: &Request) -> String {
        request
            .body()
            .and_then(Body::as_bytes)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn should_build_url_with_encoded_path_and_query() {
        let mut request = descriptor(
            Method::GET,
            CallPath::from("/user/{username}").add_param("username", "a b"),
        );
        request.query = CallQuery::new().add_param("filter", "x&y");

        let url = client().build_url(&request).expect("valid url");

        insta::assert_snapshot!(url, @"http://localhost:8080/v2/user/a%20b?filter=x%26y");
    }

    #[test]
    fn should_select_json_accept_header() {
        let mut request = descriptor(Method::GET, CallPath::from("/user/login"));
        request.accepts = &["application/xml", "application/json"];

        let http_request = client().build_request(&request).expect("valid request");

        assert_eq!(
            http_request.headers().get(ACCEPT).map(HeaderValue::as_bytes),
            Some(&b"application/json"[..])
        );
        assert!(http_request.body().is_none());
        assert!(http_request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn should_encode_json_body() {
        let mut request = descriptor(Method::POST, CallPath::from("/user"));
        request.body = RequestBody::Entity(User::named("user1"));

        let http_request = client().build_request(&request).expect("valid request");

        assert_eq!(http_request.method(), Method::POST);
        assert_eq!(
            http_request.headers().get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(&b"application/json"[..])
        );
        insta::assert_snapshot!(body_text(&http_request), @r#"{"username":"user1"}"#);
    }

    #[test]
    fn should_encode_form_parameters() {
        let mut request = descriptor(Method::POST, CallPath::from("/user"));
        request.form = CallForm::new().add_field("name", "doggie").add_field("status", "sold");

        let http_request = client().build_request(&request).expect("valid request");

        assert_eq!(
            http_request.headers().get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(&b"application/x-www-form-urlencoded"[..])
        );
        insta::assert_snapshot!(body_text(&http_request), @"name=doggie&status=sold");
    }

    #[test]
    fn should_inject_registered_authentication_and_skip_unknown() {
        let client = ApiClient::builder()
            .with_authentication("api_key", Authentication::ApiKey {
                header_name: "api_key".to_string(),
                key: "special-key".into(),
            })
            .build()
            .expect("valid client");
        let mut request = descriptor(Method::GET, CallPath::from("/user/logout"));
        request.auth_names = vec!["api_key", "petstore_auth"];

        let http_request = client.build_request(&request).expect("valid request");

        assert_eq!(
            http_request.headers().get("api_key").map(HeaderValue::as_bytes),
            Some(&b"special-key"[..])
        );
        assert!(http_request.headers().get(http::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn should_merge_default_headers() {
        let client = ApiClient::builder()
            .with_default_header("X-Client", "petstore")
            .with_default_header("X-Trace", "default")
            .build()
            .expect("valid client");
        let mut request = descriptor(Method::GET, CallPath::from("/user/logout"));
        request.headers = CallHeaders::new().add_header("X-Trace", "call");

        let http_request = client.build_request(&request).expect("valid request");

        assert_eq!(
            http_request.headers().get("x-client").map(HeaderValue::as_bytes),
            Some(&b"petstore"[..])
        );
        assert_eq!(
            http_request.headers().get("x-trace").map(HeaderValue::as_bytes),
            Some(&b"call"[..])
        );
    }

    #[test]
    fn should_fail_on_unresolved_path() {
        let request = descriptor(Method::DELETE, CallPath::from("/user/{username}"));

        let error = client().build_request(&request).expect_err("unresolved path");

        insta::assert_snapshot!(error, @r#"Path '/user/{username}' is missing required arguments: ["username"]"#);
    }

    #[test]
    fn should_truncate_long_body() {
        let short = truncate_body("short".to_string());
        let long = truncate_body("é".repeat(BODY_MAX_LENGTH));

        assert_eq!(short, "short");
        assert!(long.ends_with("... (truncated)"));
        assert!(long.len() <= BODY_MAX_LENGTH + "... (truncated)".len());
    }
}
