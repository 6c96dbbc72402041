//! Route declarations, grouped by URL prefix

pub mod function_routes;
pub mod system_routes;
pub mod webhook_routes;
