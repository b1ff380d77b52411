use super::ParamValue;
use super::map::ParamMap;
use crate::client::error::ApiClientError;

/// Form parameters of a call, sent as an `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallForm {
    fields: ParamMap,
}

impl CallForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a form field, replacing any previous value under the same name.
    #[must_use]
    pub fn add_field(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The bound value of a form field.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.fields.get(name)
    }

    /// Names of the bound fields.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.names()
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is bound.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the fields as a form body.
    pub(in crate::client) fn to_form_string(&self) -> Result<String, ApiClientError> {
        let pairs = self.fields.to_pairs()?;
        serde_urlencoded::to_string(&pairs).map_err(ApiClientError::from)
    }
}
