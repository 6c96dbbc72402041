pub mod auth;
pub mod function;
