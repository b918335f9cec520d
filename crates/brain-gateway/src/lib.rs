//! Backend gateway for the Brain client.
//!
//! Wraps the question-answering backend behind a single `send` call that
//! serializes the payload, issues exactly one HTTP request, and translates
//! transport and protocol faults into typed errors. No retries, no state.

pub mod client;
pub mod error;

pub use client::{Endpoint, Gateway, HttpGateway};
pub use error::GatewayError;
