pub mod register_request;
pub mod login_request;
pub mod update_user_request;
pub mod update_password_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use update_password_request::UpdatePasswordRequest;
pub use update_user_request::UpdateUserRequest;
