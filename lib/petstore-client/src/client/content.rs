//! Content negotiation and body encoding.

use mime::Mime;
use serde::Serialize;

use super::error::ApiClientError;
use super::request::RequestBody;

/// Whether the media type is JSON (`application/json`, `application/problem+json`, ...).
pub fn is_json_mime(content_type: &str) -> bool {
    content_type
        .parse::<Mime>()
        .is_ok_and(|parsed| parsed.subtype() == mime::JSON || parsed.suffix() == Some(mime::JSON))
}

/// Whether the media type is XML (`application/xml`, `text/xml`, `application/atom+xml`, ...).
pub fn is_xml_mime(content_type: &str) -> bool {
    content_type
        .parse::<Mime>()
        .is_ok_and(|parsed| parsed.subtype() == mime::XML || parsed.suffix() == Some(mime::XML))
}

/// Picks the `Accept` header value for a list of acceptable media types.
///
/// JSON wins when listed; otherwise every type is sent, comma separated.
/// Returns `None` when the list is empty.
///
/// ```rust
/// use petstore_client::select_header_accept;
///
/// assert_eq!(
///     select_header_accept(&["application/xml", "application/json"]).as_deref(),
///     Some("application/json")
/// );
/// assert_eq!(select_header_accept(&[]), None);
/// ```
pub fn select_header_accept(accepts: &[&str]) -> Option<String> {
    if accepts.is_empty() {
        return None;
    }
    let selected = accepts
        .iter()
        .find(|accept| is_json_mime(accept))
        .map_or_else(|| accepts.join(","), |json| (*json).to_string());
    Some(selected)
}

/// Picks the `Content-Type` header value for a list of submittable media types.
///
/// Defaults to `application/json` when the list is empty or contains JSON.
pub fn select_header_content_type(content_types: &[&str]) -> String {
    match content_types.first() {
        None => mime::APPLICATION_JSON.to_string(),
        Some(first) => content_types
            .iter()
            .find(|content_type| is_json_mime(content_type))
            .unwrap_or(first)
            .to_string(),
    }
}

/// Serializes a request payload according to its content type.
///
/// Returns `None` for [`RequestBody::None`].
///
/// # Errors
///
/// Fails when the payload cannot be serialized in the requested format.
/// XML payloads must be a single entity: a list has no root element.
pub fn encode_body<B>(
    body: &RequestBody<B>,
    content_type: &str,
) -> Result<Option<Vec<u8>>, ApiClientError>
where
    B: Serialize,
{
    let data = match body {
        RequestBody::None => return Ok(None),
        RequestBody::Entity(entity) if is_xml_mime(content_type) => to_xml(entity)?,
        RequestBody::Entities(_) if is_xml_mime(content_type) => {
            return Err(ApiClientError::SerializationError {
                message: format!("Cannot send a list of entities as '{content_type}'"),
            });
        }
        RequestBody::Entity(entity) => serde_json::to_vec(entity)?,
        RequestBody::Entities(entities) => serde_json::to_vec(entities)?,
    };
    Ok(Some(data))
}

fn to_xml<B: Serialize>(entity: &B) -> Result<Vec<u8>, ApiClientError> {
    serde_xml_rs::to_string(entity)
        .map(String::into_bytes)
        .map_err(|err| ApiClientError::SerializationError {
            message: format!("Failed to serialize XML body: {err}"),
        })
}
