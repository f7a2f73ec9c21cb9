//! HTTP client for the EcoLearn server.
//!
//! Wraps the three JSON endpoints the client-side flows talk to: quiz
//! submission, challenge join and challenge completion. Responses are
//! decoded against a strict schema - a success flag with required fields
//! missing is a [`TransportError`](ecolearn_types::TransportError), never
//! a partially filled result.
//!
//! Every request carries an explicit timeout (30 seconds unless
//! configured otherwise), so a stalled connection surfaces as a transport
//! error instead of leaving the caller waiting forever.

mod client;
pub use client::{ApiClient, DEFAULT_TIMEOUT};

mod config;
pub use config::ClientConfig;
