pub mod request;
pub mod response;

pub use request::{CreateEventRequest, UpdateEventRequest};
pub use response::EventResponse;
