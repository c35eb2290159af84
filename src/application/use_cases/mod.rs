mod astro_forecast;
mod calculate_natal_chart;
mod icebreaker;
mod match_compatibility;

pub use astro_forecast::*;
pub use calculate_natal_chart::*;
pub use icebreaker::*;
pub use match_compatibility::*;
