use crate::entities::TeamsResponse;
use crate::errors::DomainError;
use crate::repositories::ColleaguesDao;
use std::sync::Arc;
use tracing::debug;

/// Forwards colleague lookups to the HR backend
pub struct ColleaguesService {
    colleagues_dao: Arc<dyn ColleaguesDao>,
}

impl ColleaguesService {
    pub fn new(colleagues_dao: Arc<dyn ColleaguesDao>) -> Self {
        Self { colleagues_dao }
    }

    pub async fn get_colleagues_members(&self, person_id: &str) -> Result<TeamsResponse, DomainError> {
        debug!(person_id, "delegating get_colleagues_members");
        self.colleagues_dao.get_colleagues_members(person_id).await
    }
}
