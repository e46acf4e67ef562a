pub mod auth_response;
pub mod email;
pub mod password;
pub mod user;
pub mod user_status;
