pub mod client;

pub use client::{ClaimApi, HttpClaimApi};
