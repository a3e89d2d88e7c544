pub mod error;
pub mod greeting;
pub mod status_message;
pub mod users;
