pub mod google_profile;

pub use google_profile::GoogleProfile;
