pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    validate_user::{ValidateUserError, ValidateUserUseCase},
};
