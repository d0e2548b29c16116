use crate::entities::TeamsResponse;
use crate::errors::DomainError;
use async_trait::async_trait;

/// HR backend access for colleague lookups
#[async_trait]
pub trait ColleaguesDao: Send + Sync {
    async fn get_colleagues_members(&self, person_id: &str) -> Result<TeamsResponse, DomainError>;
}
