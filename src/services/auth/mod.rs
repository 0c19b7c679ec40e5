pub mod credential_service;
pub mod token_service;

pub use credential_service::{CredentialService, LoginMethod};
pub use token_service::TokenService;
