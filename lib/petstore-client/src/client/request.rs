use std::borrow::Cow;
use std::fmt;

use http::Method;
use utoipa::ToSchema;

use super::error::ApiClientError;
use super::parameters::{CallForm, CallHeaders, CallPath, CallQuery};

/// Payload of a call.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody<B> {
    /// The operation carries no body.
    #[default]
    None,
    /// A single entity, sent as is.
    Entity(B),
    /// A list of entities, for bulk operations.
    Entities(Vec<B>),
}

impl<B> RequestBody<B> {
    /// Whether a payload is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The type a response body is expected to deserialize into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReturnType {
    /// No return value expected.
    #[default]
    None,
    /// A primitive type tag, such as `"String"`.
    Primitive(&'static str),
    /// A named model type.
    Model(Cow<'static, str>),
    /// An array of another return type.
    Array(Box<ReturnType>),
}

impl ReturnType {
    /// The `String` primitive.
    pub const STRING: Self = Self::Primitive("String");

    /// The model type `T`, named after its schema.
    pub fn model<T: ToSchema>() -> Self {
        Self::Model(T::name())
    }

    /// An array of the model type `T`.
    pub fn array_of<T: ToSchema>() -> Self {
        Self::Array(Box::new(Self::model::<T>()))
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "nothing"),
            Self::Primitive(name) => write!(f, "{name}"),
            Self::Model(name) => write!(f, "{name}"),
            Self::Array(inner) => write!(f, "Array<{inner}>"),
        }
    }
}

/// A fully bound request, ready to be handed to a [`Transport`](super::Transport).
///
/// Built fresh for every call and owned by it; the transport consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor<B = ()> {
    pub(crate) operation: &'static str,
    pub(crate) method: Method,
    pub(crate) path: CallPath,
    pub(crate) query: CallQuery,
    pub(crate) headers: CallHeaders,
    pub(crate) form: CallForm,
    pub(crate) body: RequestBody<B>,
    pub(crate) content_types: Vec<&'static str>,
    pub(crate) accepts: &'static [&'static str],
    pub(crate) auth_names: Vec<&'static str>,
    pub(crate) return_type: ReturnType,
}

impl<B> RequestDescriptor<B> {
    /// Identifier of the operation this request was built for.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path template with its bound path parameters.
    pub fn path(&self) -> &CallPath {
        &self.path
    }

    /// Path with every placeholder substituted.
    ///
    /// # Errors
    ///
    /// See [`CallPath::resolve`].
    pub fn resolved_path(&self) -> Result<String, ApiClientError> {
        self.path.resolve()
    }

    /// Query parameters.
    pub fn query(&self) -> &CallQuery {
        &self.query
    }

    /// Header parameters.
    pub fn headers(&self) -> &CallHeaders {
        &self.headers
    }

    /// Form parameters.
    pub fn form(&self) -> &CallForm {
        &self.form
    }

    /// Payload.
    pub fn body(&self) -> &RequestBody<B> {
        &self.body
    }

    /// Takes the payload out of the request.
    pub fn into_body(self) -> RequestBody<B> {
        self.body
    }

    /// Content types the request may be submitted as.
    pub fn content_types(&self) -> &[&'static str] {
        &self.content_types
    }

    /// Acceptable response content types, by order of preference.
    pub fn accepts(&self) -> &'static [&'static str] {
        self.accepts
    }

    /// Names of the security schemes to apply.
    pub fn auth_names(&self) -> &[&'static str] {
        &self.auth_names
    }

    /// Expected response type.
    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    pub(crate) fn into_return_type(self) -> ReturnType {
        self.return_type
    }

    pub(crate) fn headers_mut(&mut self) -> &mut CallHeaders {
        &mut self.headers
    }

    pub(crate) fn query_mut(&mut self) -> &mut CallQuery {
        &mut self.query
    }

    pub(crate) fn form_mut(&mut self) -> &mut CallForm {
        &mut self.form
    }

    pub(crate) fn add_auth_name(&mut self, name: &'static str) {
        if !self.auth_names.contains(&name) {
            self.auth_names.push(name);
        }
    }

    pub(crate) fn set_content_type(&mut self, content_type: &'static str) {
        self.content_types = vec![content_type];
    }
}
