//! Endpoint clients.
//!
//! One struct per API tag, one method per operation. Each method validates
//! its required parameters, binds them into a [`RequestDescriptor`](crate::RequestDescriptor)
//! and returns an [`ApiCall`] that hands the descriptor to the transport when awaited.

mod call;
pub use self::call::ApiCall;

mod operation;
pub use self::operation::OperationSpec;

mod default;
pub use self::default::{DefaultApi, FOO_GET};

mod user;
pub use self::user::{
    CREATE_USER, CREATE_USERS_WITH_ARRAY_INPUT, CREATE_USERS_WITH_LIST_INPUT, DELETE_USER,
    GET_USER_BY_NAME, LOGIN_USER, LOGOUT_USER, UPDATE_USER, UserApi,
};

#[cfg(test)]
pub(crate) mod tests {
    use std::future::{self, Future};
    use std::sync::{Arc, Mutex};

    use http::{HeaderMap, Method, StatusCode};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::client::{
        ApiClientError, ApiResponse, RequestBody, RequestDescriptor, ReturnType, Transport,
    };

    /// What a [`RecordingTransport`] saw of a request.
    #[derive(Debug, Clone)]
    pub(crate) struct RecordedCall {
        pub(crate) operation: &'static str,
        pub(crate) method: Method,
        pub(crate) path: String,
        pub(crate) query: Option<String>,
        pub(crate) headers: Vec<String>,
        pub(crate) form: Vec<String>,
        pub(crate) body: serde_json::Value,
        pub(crate) content_types: Vec<&'static str>,
        pub(crate) auth_names: Vec<&'static str>,
        pub(crate) return_type: ReturnType,
    }

    impl RecordedCall {
        fn record<B: Serialize>(request: &RequestDescriptor<B>) -> Result<Self, ApiClientError> {
            let body = match request.body() {
                RequestBody::None => serde_json::Value::Null,
                RequestBody::Entity(entity) => serde_json::to_value(entity)?,
                RequestBody::Entities(entities) => serde_json::to_value(entities)?,
            };
            let query = (!request.query().is_empty())
                .then(|| request.query().to_query_string())
                .transpose()?;

            Ok(Self {
                operation: request.operation(),
                method: request.method().clone(),
                path: request.resolved_path()?,
                query,
                headers: request.headers().names().map(String::from).collect(),
                form: request.form().names().map(String::from).collect(),
                body,
                content_types: request.content_types().to_vec(),
                auth_names: request.auth_names().to_vec(),
                return_type: request.return_type().clone(),
            })
        }
    }

    /// Records every request and answers with a canned outcome.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTransport {
        calls: Arc<Mutex<Vec<RecordedCall>>>,
        response: serde_json::Value,
        failure: Option<(u16, &'static str)>,
    }

    impl RecordingTransport {
        pub(crate) fn responding(response: serde_json::Value) -> Self {
            Self {
                response,
                ..Self::default()
            }
        }

        pub(crate) fn failing(status_code: u16, body: &'static str) -> Self {
            Self {
                failure: Some((status_code, body)),
                ..Self::default()
            }
        }

        pub(crate) fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().expect("not poisoned").clone()
        }

        fn respond<B, D>(&self, request: &RequestDescriptor<B>) -> Result<ApiResponse<D>, ApiClientError>
        where
            B: Serialize,
            D: DeserializeOwned,
        {
            let recorded = RecordedCall::record(request)?;
            self.calls.lock().expect("not poisoned").push(recorded);

            if let Some((status_code, body)) = self.failure {
                return Err(ApiClientError::UnexpectedStatusCode {
                    status_code,
                    body: body.to_string(),
                });
            }
            let data = serde_json::from_value(self.response.clone())?;
            Ok(ApiResponse::new(StatusCode::OK, HeaderMap::new(), data))
        }
    }

    impl Transport for RecordingTransport {
        fn call<B, D>(
            &self,
            request: RequestDescriptor<B>,
        ) -> impl Future<Output = Result<ApiResponse<D>, ApiClientError>> + Send
        where
            B: Serialize + Send + Sync + 'static,
            D: DeserializeOwned + Send + 'static,
        {
            future::ready(self.respond(&request))
        }
    }
}
