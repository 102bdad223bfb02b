// src/integrations/mod.rs
//
// External Integrations Module

pub mod sdi;

pub use sdi::client::{ClaimApi, HttpClaimApi};
