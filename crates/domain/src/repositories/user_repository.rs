use crate::entities::{NewUser, User};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Repository trait - defines what the registry needs from storage
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign an id to `user`, append it and return the stored record.
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;
    /// First record with `id`, if any.
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;
    /// Snapshot of all records in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    /// Remove every record with `id`; `true` if anything was removed.
    async fn delete(&self, id: u64) -> Result<bool, DomainError>;
}
