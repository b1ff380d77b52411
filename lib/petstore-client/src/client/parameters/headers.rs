use super::ParamValue;
use super::map::ParamMap;
use crate::client::error::ApiClientError;

/// Header parameters of a call.
///
/// Values are rendered with the simple style (arrays joined with `,`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallHeaders {
    headers: ParamMap,
}

impl CallHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a header, replacing any previous value under the same name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petstore_client::CallHeaders;
    ///
    /// let headers = CallHeaders::new()
    ///     .add_header("X-Request-ID", "abc-123-def")
    ///     .add_header("X-Retry-Count", 3);
    /// assert_eq!(headers.len(), 2);
    /// ```
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The bound value of a header.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.headers.get(name)
    }

    /// Names of the bound headers.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.names()
    }

    /// Number of bound headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether no header is bound.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Adds every header of `other`, which wins on name conflicts.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.headers.merge(other.headers);
        self
    }

    /// Renders the headers as `(name, value)` string pairs.
    pub(in crate::client) fn to_http_headers(
        &self,
    ) -> Result<Vec<(String, String)>, ApiClientError> {
        self.headers.to_string_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty_headers() {
        let headers = CallHeaders::new();

        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_add_headers_of_different_types() {
        let headers = CallHeaders::new()
            .add_header("X-Request-ID", "abc-123")
            .add_header("X-Retry-Count", 3_u32)
            .add_header("X-Debug", true)
            .add_header("X-Tags", vec!["a", "b"]);

        let http_headers = headers.to_http_headers().expect("should render");

        insta::assert_debug_snapshot!(http_headers, @r#"
        [
            (
                "X-Request-ID",
                "abc-123",
            ),
            (
                "X-Retry-Count",
                "3",
            ),
            (
                "X-Debug",
                "true",
            ),
            (
                "X-Tags",
                "a,b",
            ),
        ]
        "#);
    }

    #[test]
    fn test_merge_headers_other_wins() {
        let headers = CallHeaders::new()
            .add_header("X-Token", "old")
            .merge(CallHeaders::new().add_header("X-Token", "new"));

        assert_eq!(headers.get("X-Token"), Some(&ParamValue::from("new")));
    }
}
