pub mod token;

pub use token::{ExpiringClaims, ResetClaims, SessionClaims, TokenPurpose};
