use http::Method;

use super::call::ApiCall;
use super::operation::{ACCEPT_JSON, OperationSpec};
use crate::client::{ApiClientError, ReturnType, Transport};
use crate::model::InlineResponseDefault;

/// `GET /foo`
pub static FOO_GET: OperationSpec = OperationSpec {
    id: "foo_get",
    method: Method::GET,
    path: "/foo",
    required: &[],
    content_types: &[],
    accepts: ACCEPT_JSON,
    auth_names: &[],
};

/// Operations without a tag.
#[derive(Debug, Clone)]
pub struct DefaultApi<T> {
    transport: T,
}

impl<T> DefaultApi<T>
where
    T: Transport,
{
    /// Creates the endpoint client on top of a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the `/foo` resource.
    ///
    /// # Errors
    ///
    /// Never fails: the operation has no required parameter.
    pub fn foo_get(&self) -> Result<ApiCall<'_, T, (), InlineResponseDefault>, ApiClientError> {
        let request = FOO_GET.descriptor(ReturnType::model::<InlineResponseDefault>());
        Ok(ApiCall::new(&self.transport, request))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::tests::RecordingTransport;
    use crate::model::Foo;

    #[test]
    fn should_describe_foo_get() {
        let api = DefaultApi::new(RecordingTransport::default());

        let request = api.foo_get().expect("valid call").into_request();

        assert_eq!(request.operation(), "foo_get");
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.resolved_path().expect("resolved"), "/foo");
        assert!(request.query().is_empty());
        assert!(request.headers().is_empty());
        assert!(request.form().is_empty());
        assert!(request.body().is_none());
        assert_eq!(request.accepts(), ["application/json"]);
        assert!(request.content_types().is_empty());
        insta::assert_snapshot!(request.return_type(), @"InlineResponseDefault");
    }

    #[tokio::test]
    async fn should_decode_inline_response() {
        let transport = RecordingTransport::responding(json!({ "string": { "bar": "baz" } }));
        let api = DefaultApi::new(&transport);

        let response = api.foo_get().expect("valid call").await.expect("ok");

        assert_eq!(
            response.into_data(),
            InlineResponseDefault {
                string: Some(Foo {
                    bar: "baz".to_string()
                }),
            }
        );
        assert_eq!(transport.calls().len(), 1);
    }
}
