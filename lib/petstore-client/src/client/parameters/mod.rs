//! Parameter bindings of a call.
//!
//! - [`CallPath`] - Path template and its placeholders (e.g., `/user/{username}`)
//! - [`CallQuery`] - Query string parameters
//! - [`CallHeaders`] - Header parameters
//! - [`CallForm`] - Form parameters

mod param;
pub use self::param::{ParamStyle, ParamValue};

mod map;

mod path;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod form;
pub use self::form::CallForm;
