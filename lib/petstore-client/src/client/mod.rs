use std::future::Future;

use http::Uri;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

mod builder;
pub use self::builder::ApiClientBuilder;

mod parameters;
pub use self::parameters::{CallForm, CallHeaders, CallPath, CallQuery, ParamStyle, ParamValue};

mod request;
pub use self::request::{RequestBody, RequestDescriptor, ReturnType};

mod transport;
pub use self::transport::{ApiResponse, Transport, decode_response};

mod content;
pub use self::content::{
    encode_body, is_json_mime, is_xml_mime, select_header_accept, select_header_content_type,
};

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod error;
pub use self::error::ApiClientError;

mod execution;


/// HTTP [`Transport`] for the Petstore service, backed by [`reqwest`].
///
/// Resolves the request path against the configured base URI, negotiates
/// `Accept` and `Content-Type`, injects the registered credentials, checks the
/// status code and decodes the response into the declared return type.
///
/// Cloning is cheap: clones share the connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use petstore_client::{ApiClient, UserApi};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_host("localhost")
///     .with_port(8080)
///     .build()?;
/// let users = UserApi::new(client);
///
/// let session = users.login_user("user1", "secret")?.await?.into_data();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_uri: Uri,
    authentications: IndexMap<String, Authentication>,
    default_headers: CallHeaders,
}

impl ApiClient {
    /// Creates a builder, see [`ApiClientBuilder`] for the defaults.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Base URI every operation path is appended to.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    /// Names of the registered security schemes.
    pub fn authentication_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.authentications.keys().map(String::as_str)
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &CallHeaders {
        &self.default_headers
    }
}

impl Transport for ApiClient {
    fn call<B, D>(
        &self,
        request: RequestDescriptor<B>,
    ) -> impl Future<Output = Result<ApiResponse<D>, ApiClientError>> + Send
    where
        B: Serialize + Send + Sync + 'static,
        D: DeserializeOwned + Send + 'static,
    {
        self.execute(request)
    }
}
