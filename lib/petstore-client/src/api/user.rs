use http::Method;

use super::call::ApiCall;
use super::operation::{ACCEPT_XML_JSON, OperationSpec};
use crate::client::{ApiClientError, RequestBody, ReturnType, Transport};
use crate::model::User;

/// `POST /user`
pub static CREATE_USER: OperationSpec = OperationSpec {
    id: "createUser",
    method: Method::POST,
    path: "/user",
    required: &["body"],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// `POST /user/createWithArray`
pub static CREATE_USERS_WITH_ARRAY_INPUT: OperationSpec = OperationSpec {
    id: "createUsersWithArrayInput",
    method: Method::POST,
    path: "/user/createWithArray",
    required: &["body"],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// `POST /user/createWithList`
pub static CREATE_USERS_WITH_LIST_INPUT: OperationSpec = OperationSpec {
    id: "createUsersWithListInput",
    method: Method::POST,
    path: "/user/createWithList",
    required: &["body"],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// `DELETE /user/{username}`
pub static DELETE_USER: OperationSpec = OperationSpec {
    id: "deleteUser",
    method: Method::DELETE,
    path: "/user/{username}",
    required: &["username"],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// `GET /user/{username}`
pub static GET_USER_BY_NAME: OperationSpec = OperationSpec {
    id: "getUserByName",
    method: Method::GET,
    path: "/user/{username}",
    required: &["username"],
    content_types: &[],
    accepts: ACCEPT_XML_JSON,
    auth_names: &[],
};

/// `GET /user/login`
pub static LOGIN_USER: OperationSpec = OperationSpec {
    id: "loginUser",
    method: Method::GET,
    path: "/user/login",
    required: &["username", "password"],
    content_types: &[],
    accepts: ACCEPT_XML_JSON,
    auth_names: &[],
};

/// `GET /user/logout`
pub static LOGOUT_USER: OperationSpec = OperationSpec {
    id: "logoutUser",
    method: Method::GET,
    path: "/user/logout",
    required: &[],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// `PUT /user/{username}`
pub static UPDATE_USER: OperationSpec = OperationSpec {
    id: "updateUser",
    method: Method::PUT,
    path: "/user/{username}",
    required: &["username", "body"],
    content_types: &[],
    accepts: &[],
    auth_names: &[],
};

/// Operations about users.
///
/// Every method checks its required parameters first and fails with
/// [`ApiClientError::InvalidArgument`] when one is `None`; the transport is
/// only reached once the returned [`ApiCall`] is awaited.
///
/// ```rust
/// use petstore_client::{ApiClient, UserApi};
///
/// # fn example() -> Result<(), petstore_client::ApiClientError> {
/// let users = UserApi::new(ApiClient::builder().build()?);
///
/// let error = users.delete_user(None).expect_err("username is required");
/// assert_eq!(
///     error.to_string(),
///     "Missing the required parameter 'username' when calling deleteUser"
/// );
///
/// let call = users.delete_user("user1")?;
/// assert_eq!(call.request().resolved_path()?, "/user/user1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UserApi<T> {
    transport: T,
}

impl<T> UserApi<T>
where
    T: Transport,
{
    /// Creates the endpoint client on top of a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates a user.
    ///
    /// This can only be done by the logged in user.
    ///
    /// # Errors
    ///
    /// Fails when `body` is `None`.
    pub fn create_user(
        &self,
        body: impl Into<Option<User>>,
    ) -> Result<ApiCall<'_, T, User>, ApiClientError> {
        let spec = &CREATE_USER;
        let body = spec.require("body", body.into())?;

        let mut request = spec.descriptor(ReturnType::None);
        request.body = RequestBody::Entity(body);
        Ok(ApiCall::new(&self.transport, request))
    }

    /// Creates a list of users from an array.
    ///
    /// # Errors
    ///
    /// Fails when `body` is `None`.
    pub fn create_users_with_array_input(
        &self,
        body: impl Into<Option<Vec<User>>>,
    ) -> Result<ApiCall<'_, T, User>, ApiClientError> {
        create_users(&self.transport, &CREATE_USERS_WITH_ARRAY_INPUT, body.into())
    }

    /// Creates a list of users from a list.
    ///
    /// # Errors
    ///
    /// Fails when `body` is `None`.
    pub fn create_users_with_list_input(
        &self,
        body: impl Into<Option<Vec<User>>>,
    ) -> Result<ApiCall<'_, T, User>, ApiClientError> {
        create_users(&self.transport, &CREATE_USERS_WITH_LIST_INPUT, body.into())
    }

    /// Deletes a user.
    ///
    /// This can only be done by the logged in user.
    ///
    /// # Errors
    ///
    /// Fails when `username` is `None`.
    pub fn delete_user<'s>(
        &self,
        username: impl Into<Option<&'s str>>,
    ) -> Result<ApiCall<'_, T>, ApiClientError> {
        let spec = &DELETE_USER;
        let username = spec.require("username", username.into())?;

        let mut request = spec.descriptor(ReturnType::None);
        request.path = request.path.add_param("username", username);
        Ok(ApiCall::new(&self.transport, request))
    }

    /// Gets a user by user name.
    ///
    /// The response decodes into a [`User`].
    ///
    /// # Errors
    ///
    /// Fails when `username` is `None`.
    pub fn get_user_by_name<'s>(
        &self,
        username: impl Into<Option<&'s str>>,
    ) -> Result<ApiCall<'_, T, (), User>, ApiClientError> {
        let spec = &GET_USER_BY_NAME;
        let username = spec.require("username", username.into())?;

        let mut request = spec.descriptor(ReturnType::model::<User>());
        request.path = request.path.add_param("username", username);
        Ok(ApiCall::new(&self.transport, request))
    }

    /// Logs a user into the system.
    ///
    /// The response is the session message, as text.
    ///
    /// # Errors
    ///
    /// Fails when `username` or `password` is `None`, checked in that order.
    pub fn login_user<'s>(
        &self,
        username: impl Into<Option<&'s str>>,
        password: impl Into<Option<&'s str>>,
    ) -> Result<ApiCall<'_, T, (), String>, ApiClientError> {
        let spec = &LOGIN_USER;
        let username = spec.require("username", username.into())?;
        let password = spec.require("password", password.into())?;

        let mut request = spec.descriptor(ReturnType::STRING);
        request.query = request
            .query
            .add_param("username", username)
            .add_param("password", password);
        Ok(ApiCall::new(&self.transport, request))
    }

    /// Logs out the current logged in user session.
    ///
    /// # Errors
    ///
    /// Never fails: the operation has no required parameter.
    pub fn logout_user(&self) -> Result<ApiCall<'_, T>, ApiClientError> {
        let request = LOGOUT_USER.descriptor(ReturnType::None);
        Ok(ApiCall::new(&self.transport, request))
    }

    /// Updates a user.
    ///
    /// This can only be done by the logged in user.
    ///
    /// # Errors
    ///
    /// Fails when `username` or `body` is `None`, checked in that order.
    pub fn update_user<'s>(
        &self,
        username: impl Into<Option<&'s str>>,
        body: impl Into<Option<User>>,
    ) -> Result<ApiCall<'_, T, User>, ApiClientError> {
        let spec = &UPDATE_USER;
        let username = spec.require("username", username.into())?;
        let body = spec.require("body", body.into())?;

        let mut request = spec.descriptor(ReturnType::None);
        request.path = request.path.add_param("username", username);
        request.body = RequestBody::Entity(body);
        Ok(ApiCall::new(&self.transport, request))
    }
}

fn create_users<'a, T>(
    transport: &'a T,
    spec: &OperationSpec,
    body: Option<Vec<User>>,
) -> Result<ApiCall<'a, T, User>, ApiClientError> {
    let users = spec.require("body", body)?;

    let mut request = spec.descriptor(ReturnType::None);
    request.body = RequestBody::Entities(users);
    Ok(ApiCall::new(transport, request))
}
