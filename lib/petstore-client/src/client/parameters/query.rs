use super::ParamValue;
use super::map::ParamMap;
use crate::client::error::ApiClientError;

/// Query string parameters of a call.
///
/// # Examples
///
/// ```rust
/// use petstore_client::CallQuery;
///
/// let query = CallQuery::new()
///     .add_param("username", "user1")
///     .add_param("password", "secret");
///
/// assert_eq!(query.to_query_string()?, "username=user1&password=secret");
/// # Ok::<(), petstore_client::ApiClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallQuery {
    params: ParamMap,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a query parameter, replacing any previous value under the same name.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// The bound value of a query parameter.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Names of the bound parameters.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.names()
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter is bound.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Adds every binding of `other`, which wins on name conflicts.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.params.merge(other.params);
        self
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded` query string.
    ///
    /// # Errors
    ///
    /// Fails on object values or nested arrays.
    pub fn to_query_string(&self) -> Result<String, ApiClientError> {
        let pairs = self.params.to_pairs()?;
        serde_urlencoded::to_string(&pairs).map_err(ApiClientError::from)
    }
}
