//! # Application Layer
//!
//! The model-response adapter: prompt construction, output schemas, reply
//! extraction, and the four operations built from them.
//!
//! Operations come in two categories with different contracts:
//! - **strict** ([`CalculateNatalChartUseCase`], [`MatchCompatibilityUseCase`])
//!   return `Result` and propagate every failure;
//! - **best-effort** ([`IcebreakerUseCase`], [`AstroForecastUseCase`]) never
//!   fail and substitute a safe default.

pub mod interfaces;
pub mod prompts;
pub mod response_parser;
pub mod schema;
mod settings;
pub mod use_cases;

pub use interfaces::*;
pub use settings::*;
pub use use_cases::*;
