use serde::Serialize;

use crate::client::error::ApiClientError;

/// How array values are rendered in a parameter string.
///
/// # Examples
///
/// ```rust
/// use petstore_client::{ParamStyle, ParamValue};
///
/// // Form style (query default): ?tags=rust&tags=web
/// let tags = ParamValue::from(vec!["rust", "web"]);
/// assert_eq!(tags.query_style(), ParamStyle::Form);
///
/// // Pipe delimited: ?tags=rust|web
/// let tags = ParamValue::from(vec!["rust", "web"]).with_style(ParamStyle::PipeDelimited);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamStyle {
    /// `Form` for query and form parameters, `Simple` for path and header parameters
    #[default]
    Default,
    /// Form style: `param=value1&param=value2` (query default)
    Form,
    /// Simple style: `value1,value2` (path default)
    Simple,
    /// Space delimited: `param=value1 value2`
    SpaceDelimited,
    /// Pipe delimited: `param=value1|value2`
    PipeDelimited,
}

/// A bound parameter value together with its serialization style.
///
/// The value is kept as a JSON scalar or an array of scalars; objects are
/// rejected when the value is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamValue {
    pub(in crate::client) value: serde_json::Value,
    pub(in crate::client) style: ParamStyle,
}

impl ParamValue {
    /// Serializes any value into a parameter with the default style.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be represented as JSON.
    pub fn try_new<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        Ok(Self {
            value,
            style: ParamStyle::Default,
        })
    }

    /// Changes the serialization style.
    #[must_use]
    pub fn with_style(mut self, style: ParamStyle) -> Self {
        self.style = style;
        self
    }

    /// The raw JSON value.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// The style actually used for query and form parameters.
    pub fn query_style(&self) -> ParamStyle {
        match self.style {
            ParamStyle::Default => ParamStyle::Form,
            style => style,
        }
    }

    /// The style actually used for path and header parameters.
    pub fn path_style(&self) -> ParamStyle {
        match self.style {
            ParamStyle::Default => ParamStyle::Simple,
            style => style,
        }
    }

    fn scalar_to_string(value: &serde_json::Value) -> Result<String, ApiClientError> {
        match value {
            serde_json::Value::String(text) => Ok(text.clone()),
            serde_json::Value::Number(number) => Ok(number.to_string()),
            serde_json::Value::Bool(flag) => Ok(flag.to_string()),
            serde_json::Value::Null => Ok(String::new()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Err(ApiClientError::UnsupportedParameterValue {
                    message: "nested complex values not supported in parameters".to_string(),
                    value: value.clone(),
                })
            }
        }
    }

    fn delimiter(style: ParamStyle) -> &'static str {
        match style {
            ParamStyle::SpaceDelimited => " ",
            ParamStyle::PipeDelimited => "|",
            ParamStyle::Default | ParamStyle::Form | ParamStyle::Simple => ",",
        }
    }

    /// Renders the value as a single string, joining arrays with the path style delimiter.
    pub(in crate::client) fn to_string_value(&self) -> Result<String, ApiClientError> {
        match &self.value {
            serde_json::Value::Array(items) => {
                let values = items
                    .iter()
                    .map(Self::scalar_to_string)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(values.join(Self::delimiter(self.path_style())))
            }
            serde_json::Value::Object(_) => Err(ApiClientError::UnsupportedParameterValue {
                message: "object values not supported in parameters".to_string(),
                value: self.value.clone(),
            }),
            scalar => Self::scalar_to_string(scalar),
        }
    }

    /// Renders the value for a query string or form body.
    ///
    /// Form style arrays yield one entry per item, other styles a single joined entry.
    pub(in crate::client) fn to_query_values(&self) -> Result<Vec<String>, ApiClientError> {
        match (&self.value, self.query_style()) {
            (serde_json::Value::Array(items), ParamStyle::Form) => {
                items.iter().map(Self::scalar_to_string).collect()
            }
            (serde_json::Value::Array(items), style) => {
                let values = items
                    .iter()
                    .map(Self::scalar_to_string)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(vec![values.join(Self::delimiter(style))])
            }
            (serde_json::Value::Object(_), _) => Err(ApiClientError::UnsupportedParameterValue {
                message: "object values not supported in parameters".to_string(),
                value: self.value.clone(),
            }),
            (scalar, _) => Self::scalar_to_string(scalar).map(|text| vec![text]),
        }
    }
}

macro_rules! param_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self {
                        value: serde_json::Value::from(value),
                        style: ParamStyle::Default,
                    }
                }
            }
        )*
    };
}

param_value_from!(String, &str, bool, i32, i64, u32, u64, f64);

impl<T> From<Vec<T>> for ParamValue
where
    serde_json::Value: From<T>,
{
    fn from(values: Vec<T>) -> Self {
        Self {
            value: serde_json::Value::Array(values.into_iter().map(Into::into).collect()),
            style: ParamStyle::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_param_value_from_str() {
        let param = ParamValue::from("user1");

        assert_eq!(param.value(), &json!("user1"));
        assert_eq!(param.style, ParamStyle::Default);
    }

    #[test]
    fn test_param_value_try_new() {
        let param = ParamValue::try_new(&42_u16).expect("serializable");

        assert_eq!(param.to_string_value().expect("scalar"), "42");
    }

    #[test]
    fn test_default_style_resolution() {
        let param = ParamValue::from(vec!["a", "b"]);

        assert_eq!(param.query_style(), ParamStyle::Form);
        assert_eq!(param.path_style(), ParamStyle::Simple);
    }

    #[rstest]
    #[case::simple(ParamStyle::Simple, "rust,web,api")]
    #[case::space(ParamStyle::SpaceDelimited, "rust web api")]
    #[case::pipe(ParamStyle::PipeDelimited, "rust|web|api")]
    fn test_array_to_string_value(#[case] style: ParamStyle, #[case] expected: &str) {
        let param = ParamValue::from(vec!["rust", "web", "api"]).with_style(style);

        assert_eq!(param.to_string_value().expect("array of scalars"), expected);
    }

    #[test]
    fn test_form_array_query_values_are_repeated() {
        let param = ParamValue::from(vec![1_i64, 2, 3]);

        let values = param.to_query_values().expect("array of scalars");

        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_pipe_array_query_values_are_joined() {
        let param = ParamValue::from(vec![1_i64, 2, 3]).with_style(ParamStyle::PipeDelimited);

        let values = param.to_query_values().expect("array of scalars");

        assert_eq!(values, vec!["1|2|3"]);
    }

    #[test]
    fn test_null_renders_as_empty_string() {
        let param = ParamValue::try_new(&Option::<String>::None).expect("serializable");

        assert_eq!(param.to_string_value().expect("null"), "");
    }

    #[test]
    fn test_object_is_rejected() {
        let param = ParamValue::try_new(&json!({"nested": "value"})).expect("serializable");

        let result = param.to_string_value();

        insta::assert_debug_snapshot!(result, @r#"
        Err(
            UnsupportedParameterValue {
                message: "object values not supported in parameters",
                value: Object {
                    "nested": String("value"),
                },
            },
        )
        "#);
    }

    #[test]
    fn test_nested_array_is_rejected() {
        let param = ParamValue::try_new(&json!([["a"], ["b"]])).expect("serializable");

        assert!(param.to_query_values().is_err());
    }
}
