use async_trait::async_trait;

use crate::domain::{DomainError, UserProfile};

/// Storage for the single "current user" profile.
///
/// There is exactly one record; `save` replaces it wholesale.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn load(&self) -> Result<Option<UserProfile>, DomainError>;

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Removes the stored profile. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), DomainError>;
}
