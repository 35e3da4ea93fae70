pub mod assignments;
pub mod auth;
pub mod common;
pub mod files;
pub mod notices;
pub mod students;

pub use common::response::ServiceMessage;
