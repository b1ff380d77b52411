use indexmap::IndexMap;

use super::ParamValue;
use crate::client::error::ApiClientError;

/// Name to value bindings shared by the query, header and form categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct ParamMap(IndexMap<String, ParamValue>);

impl ParamMap {
    pub(super) fn insert(&mut self, name: String, value: ParamValue) {
        self.0.insert(name, value);
    }

    pub(super) fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub(super) fn len(&self) -> usize {
        self.0.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(super) fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub(super) fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Expands the bindings into `(name, value)` pairs, repeating form style arrays.
    pub(super) fn to_pairs(&self) -> Result<Vec<(String, String)>, ApiClientError> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (name, param) in &self.0 {
            for value in param.to_query_values()? {
                pairs.push((name.clone(), value));
            }
        }
        Ok(pairs)
    }

    /// Renders every binding as a single string value.
    pub(super) fn to_string_pairs(&self) -> Result<Vec<(String, String)>, ApiClientError> {
        self.0
            .iter()
            .map(|(name, param)| Ok((name.clone(), param.to_string_value()?)))
            .collect()
    }
}
