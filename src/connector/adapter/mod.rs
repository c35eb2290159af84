mod anthropic_client;
mod gemini_client;
mod json_profile_repository;
mod mock_chat_client;

pub use anthropic_client::*;
pub use gemini_client::*;
pub use json_profile_repository::*;
pub use mock_chat_client::*;
