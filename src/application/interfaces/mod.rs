mod chat_client;
mod profile_repository;

pub use chat_client::*;
pub use profile_repository::*;
