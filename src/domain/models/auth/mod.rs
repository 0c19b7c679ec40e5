pub mod authenticated_user;
pub mod authentication_mode;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_mode::AuthMode;
