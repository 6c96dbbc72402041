pub mod function;
pub mod system;
pub mod webhook;
