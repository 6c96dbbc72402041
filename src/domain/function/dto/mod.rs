pub mod function_apply_request;
pub mod function_view;
pub mod registry_push_event;
