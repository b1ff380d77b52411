use std::fmt;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::mem;
use std::pin::Pin;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{ApiClientError, ApiResponse, ParamValue, RequestDescriptor, Transport};

/// A validated call, ready to be dispatched.
///
/// Returned by every endpoint method once the required parameters have been
/// checked. Nothing is sent until the call is awaited (or [`dispatch`](Self::dispatch)ed),
/// and it is sent exactly once.
///
/// `B` is the payload type and `D` the type the response decodes into.
///
/// ```rust,no_run
/// use petstore_client::{ApiClient, UserApi};
///
/// # async fn example() -> Result<(), petstore_client::ApiClientError> {
/// let users = UserApi::new(ApiClient::builder().build()?);
///
/// let user = users
///     .get_user_by_name("user1")?
///     .with_header("X-Request-ID", "abc-123")
///     .await?
///     .into_data();
/// # Ok(())
/// # }
/// ```
#[must_use = "a call does nothing until it is awaited"]
pub struct ApiCall<'a, T, B = (), D = ()> {
    transport: &'a T,
    request: RequestDescriptor<B>,
    data: PhantomData<fn() -> D>,
}

impl<'a, T, B, D> ApiCall<'a, T, B, D> {
    pub(crate) fn new(transport: &'a T, request: RequestDescriptor<B>) -> Self {
        Self {
            transport,
            request,
            data: PhantomData,
        }
    }

    /// The request this call will send.
    pub fn request(&self) -> &RequestDescriptor<B> {
        &self.request
    }

    /// Takes the request without sending it.
    pub fn into_request(self) -> RequestDescriptor<B> {
        self.request
    }

    /// Adds an extra header to the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let headers = mem::take(self.request.headers_mut());
        *self.request.headers_mut() = headers.add_header(name, value);
        self
    }

    /// Adds an extra query parameter to the request.
    pub fn with_query_param(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        let query = mem::take(self.request.query_mut());
        *self.request.query_mut() = query.add_param(name, value);
        self
    }

    /// Adds a form field.
    ///
    /// A request with form fields is sent as `application/x-www-form-urlencoded`.
    pub fn with_form_field(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let form = mem::take(self.request.form_mut());
        *self.request.form_mut() = form.add_field(name, value);
        self
    }

    /// Applies a security scheme to the request.
    ///
    /// The transport looks `name` up in its registered credentials, see
    /// [`ApiClientBuilder::with_authentication`](crate::ApiClientBuilder::with_authentication).
    pub fn with_auth_name(mut self, name: &'static str) -> Self {
        self.request.add_auth_name(name);
        self
    }

    /// Submits the payload as `content_type` (e.g. `application/xml`).
    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.request.set_content_type(content_type);
        self
    }
}

impl<T, B, D> ApiCall<'_, T, B, D>
where
    T: Transport,
    B: Serialize + Send + Sync + 'static,
    D: DeserializeOwned + Send + 'static,
{
    /// Sends the request and hands the outcome to `callback`.
    ///
    /// The callback runs exactly once, with either the decoded response or
    /// the transport error.
    pub async fn dispatch<F, R>(self, callback: F) -> R
    where
        F: FnOnce(Result<ApiResponse<D>, ApiClientError>) -> R,
    {
        callback(self.await)
    }
}

impl<'a, T, B, D> IntoFuture for ApiCall<'a, T, B, D>
where
    T: Transport,
    B: Serialize + Send + Sync + 'static,
    D: DeserializeOwned + Send + 'static,
{
    type Output = Result<ApiResponse<D>, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        let Self {
            transport,
            request,
            data: _,
        } = self;
        debug!(operation = request.operation(), method = %request.method(), "dispatching");
        Box::pin(transport.call(request))
    }
}

impl<T, B, D> fmt::Debug for ApiCall<'_, T, B, D>
where
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
