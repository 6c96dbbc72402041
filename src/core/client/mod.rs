// Function Compute provider client
pub mod fc_client;
pub mod fc_provider;
pub mod fc_signer;
pub mod fc_types;
