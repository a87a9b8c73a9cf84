pub mod error;
pub mod json;
pub mod message_response;
pub mod users;
