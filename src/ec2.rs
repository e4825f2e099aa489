//! EC2 provider integration: client wrapper and record normalization.

pub mod client;
pub mod instance;
