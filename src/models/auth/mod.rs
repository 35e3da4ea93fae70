pub mod requests;
pub mod responses;

pub use requests::{AdminLoginRequest, RegisterRequest, StudentLoginRequest};
pub use responses::{AdminLoginResponse, RegisterResponse, StudentLoginResponse};
