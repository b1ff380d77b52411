use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_bar() -> String {
    "bar".to_string()
}

/// Sample payload returned under `/foo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Foo {
    /// Defaults to `"bar"`.
    #[serde(default = "default_bar")]
    pub bar: String,
}

impl Default for Foo {
    fn default() -> Self {
        Self { bar: default_bar() }
    }
}

/// Default response of `GET /foo`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct InlineResponseDefault {
    /// The wrapped [`Foo`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<Foo>,
}
