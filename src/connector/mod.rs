//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Model transports (Gemini `generateContent`, Anthropic Messages, offline mock)
//! - Profile storage (single JSON file under the data directory)
//! - Composition root wiring both into the adapter operations

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
