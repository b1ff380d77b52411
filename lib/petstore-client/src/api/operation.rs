use http::Method;

use crate::client::{
    ApiClientError, CallForm, CallHeaders, CallPath, CallQuery, RequestBody, RequestDescriptor,
    ReturnType,
};

/// Static description of an endpoint.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    /// Operation identifier, as used in error messages.
    pub id: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template, relative to the base path.
    pub path: &'static str,
    /// Required parameters, in declaration order.
    pub required: &'static [&'static str],
    /// Content types the request may be submitted as.
    pub content_types: &'static [&'static str],
    /// Acceptable response content types.
    pub accepts: &'static [&'static str],
    /// Security schemes applied to the request.
    pub auth_names: &'static [&'static str],
}

impl OperationSpec {
    /// Unwraps a required parameter.
    ///
    /// # Errors
    ///
    /// [`ApiClientError::InvalidArgument`] when the value is absent.
    pub fn require<V>(&self, parameter: &'static str, value: Option<V>) -> Result<V, ApiClientError> {
        debug_assert!(
            self.required.contains(&parameter),
            "'{parameter}' is not a required parameter of {}",
            self.id
        );
        value.ok_or(ApiClientError::InvalidArgument {
            parameter,
            operation: self.id,
        })
    }

    /// Starts a request descriptor with empty parameter maps and no body.
    pub(crate) fn descriptor<B>(&self, return_type: ReturnType) -> RequestDescriptor<B> {
        RequestDescriptor {
            operation: self.id,
            method: self.method.clone(),
            path: CallPath::from(self.path),
            query: CallQuery::new(),
            headers: CallHeaders::new(),
            form: CallForm::new(),
            body: RequestBody::None,
            content_types: self.content_types.to_vec(),
            accepts: self.accepts,
            auth_names: self.auth_names.to_vec(),
            return_type,
        }
    }
}

pub(crate) const ACCEPT_XML_JSON: &[&str] = &["application/xml", "application/json"];
pub(crate) const ACCEPT_JSON: &[&str] = &["application/json"];

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: OperationSpec = OperationSpec {
        id: "sample",
        method: Method::GET,
        path: "/sample/{id}",
        required: &["id", "name"],
        content_types: &[],
        accepts: ACCEPT_JSON,
        auth_names: &[],
    };

    #[test]
    fn should_unwrap_present_value() {
        let value = SAMPLE.require("id", Some(42)).expect("present");

        assert_eq!(value, 42);
    }

    #[test]
    fn should_report_missing_value() {
        let error = SAMPLE
            .require::<i32>("name", None)
            .expect_err("missing");

        insta::assert_snapshot!(error, @"Missing the required parameter 'name' when calling sample");
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn should_start_an_empty_descriptor() {
        let request = SAMPLE.descriptor::<()>(ReturnType::STRING);

        assert_eq!(request.operation(), "sample");
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path().template(), "/sample/{id}");
        assert!(request.query().is_empty());
        assert!(request.headers().is_empty());
        assert!(request.form().is_empty());
        assert!(request.body().is_none());
        assert_eq!(request.accepts(), ["application/json"]);
        assert_eq!(request.return_type(), &ReturnType::STRING);
    }
}
