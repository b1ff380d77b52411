use std::fmt::Debug;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use indexmap::IndexMap;

use super::{ApiClient, ApiClientError, Authentication, CallHeaders, ParamValue};

/// Builder for [`ApiClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP
/// - **Host**: `petstore.swagger.io`
/// - **Port**: 80
/// - **Base path**: `/v2`
/// - **Authentication**: none
/// - **Default headers**: none
///
/// # Example
///
/// ```rust
/// use http::uri::Scheme;
/// use petstore_client::{ApiClient, Authentication};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("petstore.example.com")
///     .with_port(443)
///     .with_base_path("/api/v3")?
///     .with_authentication("api_key", Authentication::ApiKey {
///         header_name: "api_key".to_string(),
///         key: "special-key".into(),
///     })
///     .with_default_header("User-Agent", "petstore-client")
///     .build()?;
///
/// assert_eq!(client.base_uri().to_string(), "https://petstore.example.com:443/api/v3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: reqwest::Client,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    authentications: IndexMap<String, Authentication>,
    default_headers: CallHeaders,
}

impl ApiClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when scheme, host, port and base path do not form a valid URI.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            authentications,
            default_headers,
        } = self;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        Ok(ApiClient {
            client,
            base_uri,
            authentications,
            default_headers,
        })
    }

    /// Sets the scheme, HTTP by default.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host name or IP address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the base path every operation path is appended to.
    ///
    /// ```rust
    /// use petstore_client::ApiClient;
    ///
    /// let builder = ApiClient::builder().with_base_path("/v2");
    /// assert!(builder.is_ok());
    ///
    /// let builder = ApiClient::builder().with_base_path("not a path");
    /// assert!(builder.is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::InvalidBasePath`] when `base_path` is not a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Uses a pre-configured reqwest client (timeouts, proxies, TLS, ...).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Registers the credentials of a security scheme.
    ///
    /// Operations listing `name` among their auth names get the matching header.
    pub fn with_authentication(
        mut self,
        name: impl Into<String>,
        authentication: Authentication,
    ) -> Self {
        self.authentications.insert(name.into(), authentication);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Headers bound by an operation win over default headers.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            scheme: Scheme::HTTP,
            host: "petstore.swagger.io".to_string(),
            port: 80,
            base_path: Some(PathAndQuery::from_static("/v2")),
            authentications: IndexMap::new(),
            default_headers: CallHeaders::new(),
        }
    }
}
