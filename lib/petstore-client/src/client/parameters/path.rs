use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use super::ParamValue;
use crate::client::error::ApiClientError;

/// Matches `{name}` placeholders in a path template.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// A path template with its bound path parameters.
///
/// Placeholders use the `{name}` syntax and are substituted by exact name
/// match; the same placeholder may appear several times.
///
/// # Examples
///
/// ```rust
/// use petstore_client::CallPath;
///
/// let path = CallPath::from("/user/{username}").add_param("username", "user1");
///
/// assert_eq!(path.resolve()?, "/user/user1");
/// # Ok::<(), petstore_client::ApiClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, derive_more::Display)]
#[display("{template}")]
pub struct CallPath {
    template: String,
    args: IndexMap<String, ParamValue>,
}

impl CallPath {
    /// Binds a path parameter, replacing any previous value under the same name.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// The unresolved template, e.g. `/user/{username}`.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The bound value of a path parameter.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.args.get(name)
    }

    /// Number of bound path parameters.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether no path parameter is bound.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::PathUnresolved`] when a placeholder has no
    /// bound value, or a rendering error for unsupported values.
    pub fn resolve(&self) -> Result<String, ApiClientError> {
        let mut path = self.template.clone();

        let mut names: HashSet<&str> = RE
            .captures_iter(&self.template)
            .filter_map(|caps| caps.name("name"))
            .map(|name| name.as_str())
            .collect();

        for (name, param) in &self.args {
            if !names.remove(name.as_str()) {
                warn!(?name, template = %self.template, "path argument not found in template");
                continue;
            }

            let value = param.to_string_value()?;
            path = replace_path_param(&path, name, &encode_path_param_value(&value));
        }

        if names.is_empty() {
            Ok(path)
        } else {
            let mut missings: Vec<_> = names.into_iter().map(str::to_string).collect();
            missings.sort();
            Err(ApiClientError::PathUnresolved { path, missings })
        }
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(template: String) -> Self {
        Self {
            template,
            args: IndexMap::new(),
        }
    }
}
