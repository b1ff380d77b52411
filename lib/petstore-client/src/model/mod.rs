//! Data types exchanged with the Petstore service.

mod user;
pub use self::user::User;

mod foo;
pub use self::foo::{Foo, InlineResponseDefault};
