pub mod login;
pub mod register;
pub mod validate_user;
