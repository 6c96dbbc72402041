pub mod api;
pub mod app_state;
pub mod build_info;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
