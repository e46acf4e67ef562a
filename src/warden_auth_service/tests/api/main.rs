mod composition;
mod helpers;
mod login;
mod register;
