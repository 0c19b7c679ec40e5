pub mod auth;
pub mod email;
pub mod events;
pub mod users;

pub use auth::{CredentialService, TokenService};
pub use email::EmailService;
pub use events::EventService;
pub use users::UserService;
