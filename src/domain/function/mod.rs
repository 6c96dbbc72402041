pub mod desired_state;
pub mod dto;
pub mod function_error;
pub mod image_reference;
pub mod probe;
pub mod reconciler;
pub mod redaction;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
