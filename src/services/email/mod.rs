pub mod email_service;

pub use email_service::{EmailService, LogMailer, Mailer, OutgoingEmail};

#[cfg(test)]
pub use email_service::RecordingMailer;
