//! # petstore-client
//!
//! Typed async client for the OpenAPI Petstore sample service.
//!
//! The crate is split in two layers:
//!
//! - **Endpoint clients** ([`UserApi`], [`DefaultApi`]): one method per
//!   operation. A method checks its required parameters, binds them into a
//!   [`RequestDescriptor`] and returns an [`ApiCall`]. A missing parameter is
//!   reported immediately as [`ApiClientError::InvalidArgument`]; nothing is sent.
//! - **Transport** ([`Transport`]): sends the descriptor and decodes the
//!   response. [`ApiClient`] is the HTTP implementation, built on `reqwest`;
//!   tests can plug their own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use petstore_client::{ApiClient, Authentication, DefaultApi, User, UserApi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_authentication("api_key", Authentication::ApiKey {
//!         header_name: "api_key".to_string(),
//!         key: "special-key".into(),
//!     })
//!     .build()?;
//!
//! let users = UserApi::new(client.clone());
//! users
//!     .create_user(User {
//!         email: Some("user1@example.com".to_string()),
//!         ..User::named("user1")
//!     })?
//!     .await?;
//!
//! let user = users
//!     .get_user_by_name("user1")?
//!     .with_auth_name("api_key")
//!     .await?
//!     .into_data();
//! assert_eq!(user.username.as_deref(), Some("user1"));
//!
//! let session = users.login_user("user1", "secret")?.await?.into_data();
//! println!("{session}");
//!
//! let foo = DefaultApi::new(client).foo_get()?.await?.into_data();
//! # Ok(())
//! # }
//! ```
//!
//! ## Failing fast
//!
//! ```rust
//! use petstore_client::{ApiClient, UserApi};
//!
//! # fn main() -> Result<(), petstore_client::ApiClientError> {
//! let users = UserApi::new(ApiClient::builder().build()?);
//!
//! let error = users.login_user("user1", None).expect_err("password is required");
//! assert!(error.is_invalid_argument());
//! assert_eq!(
//!     error.to_string(),
//!     "Missing the required parameter 'password' when calling loginUser"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Callbacks
//!
//! [`ApiCall::dispatch`] hands the outcome to a closure, invoked exactly once:
//!
//! ```rust,no_run
//! use petstore_client::{ApiClient, UserApi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let users = UserApi::new(ApiClient::builder().build()?);
//!
//! users
//!     .logout_user()?
//!     .dispatch(|result| match result {
//!         Ok(response) => println!("logged out: {}", response.status()),
//!         Err(error) => eprintln!("logout failed: {error}"),
//!     })
//!     .await;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod model;

pub use self::api::{ApiCall, DefaultApi, OperationSpec, UserApi};
pub use self::client::{
    ApiClient, ApiClientBuilder, ApiClientError, ApiResponse, Authentication, AuthenticationError,
    CallForm, CallHeaders, CallPath, CallQuery, ParamStyle, ParamValue, RequestBody,
    RequestDescriptor, ReturnType, SecureString, Transport, decode_response, encode_body,
    is_json_mime, is_xml_mime, select_header_accept, select_header_content_type,
};
pub use self::model::{Foo, InlineResponseDefault, User};

/// Static descriptions of every operation.
pub mod operations {
    pub use crate::api::{
        CREATE_USER, CREATE_USERS_WITH_ARRAY_INPUT, CREATE_USERS_WITH_LIST_INPUT, DELETE_USER,
        FOO_GET, GET_USER_BY_NAME, LOGIN_USER, LOGOUT_USER, UPDATE_USER,
    };
}
