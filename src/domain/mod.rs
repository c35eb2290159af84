//! # Domain Layer
//!
//! Typed astrology records and the error taxonomy.
//! This layer is independent of transports and prompt wording.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
