use crate::entities::{EmployeesResponse, TeamsRequest, TeamsResponse};
use crate::errors::DomainError;
use crate::repositories::TeamsDao;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// Forwards team membership queries to the HR backend.
///
/// Every method passes its arguments through unchanged and returns the DAO
/// result as is, errors included.
pub struct TeamsService {
    teams_dao: Arc<dyn TeamsDao>,
}

impl TeamsService {
    pub fn new(teams_dao: Arc<dyn TeamsDao>) -> Self {
        Self { teams_dao }
    }

    pub fn identification(&self) -> &'static str {
        "TeamsServiceImpl"
    }

    pub async fn get_teams_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
        vsid: &str,
    ) -> Result<TeamsResponse, DomainError> {
        debug!(person_id, requests = requests.len(), "delegating get_team_members");
        self.teams_dao.get_team_members(person_id, requests, vsid).await
    }

    pub async fn get_sub_teams_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
    ) -> Result<TeamsResponse, DomainError> {
        debug!(person_id, requests = requests.len(), "delegating get_sub_team_members");
        self.teams_dao.get_sub_team_members(person_id, requests).await
    }

    pub async fn get_members(&self, fields: &str, vsid: &str) -> Result<EmployeesResponse, DomainError> {
        debug!(fields, "delegating get_members");
        self.teams_dao.get_members(fields, vsid).await
    }

    pub async fn get_end_of_contract_team_members_by_uo(
        &self,
        field: &str,
        vsid: &str,
    ) -> Result<EmployeesResponse, DomainError> {
        debug!(field, "delegating get_end_of_contract_team_members_by_uo");
        self.teams_dao
            .get_end_of_contract_team_members_by_uo(field, vsid)
            .await
    }

    pub async fn get_all_available_contract_team_members_by_uo(
        &self,
        field: &str,
    ) -> Result<EmployeesResponse, DomainError> {
        debug!(field, "delegating get_all_available_contract_team_members_by_uo");
        self.teams_dao
            .get_all_available_contract_team_members_by_uo(field)
            .await
    }

    pub async fn get_team_members_in_probation_by_uo(
        &self,
        field: &str,
        vsid: &str,
    ) -> Result<EmployeesResponse, DomainError> {
        debug!(field, "delegating get_team_members_in_probation_by_uo");
        self.teams_dao
            .get_team_members_in_probation_by_uo(field, vsid)
            .await
    }

    pub async fn get_team_members_in_probation_by_uo_count(
        &self,
        vsid: &str,
        result_limit: u32,
    ) -> Result<u64, DomainError> {
        debug!(result_limit, "delegating get_team_members_in_probation_by_uo_count");
        self.teams_dao
            .get_team_members_in_probation_by_uo_count(vsid, result_limit)
            .await
    }

    pub async fn get_team_members_for_termination(
        &self,
        field: &str,
        vsid: &str,
        my_id: i64,
    ) -> Result<EmployeesResponse, DomainError> {
        debug!(field, my_id, "delegating get_team_members_for_termination");
        self.teams_dao
            .get_team_members_for_termination(field, vsid, my_id)
            .await
    }

    pub async fn get_all_members_for_allowance(
        &self,
        field: &str,
        person_id: &str,
        requests: &[TeamsRequest],
    ) -> Result<TeamsResponse, DomainError> {
        debug!(field, person_id, "delegating get_all_members_for_allowance");
        self.teams_dao
            .get_all_members_for_allowance(field, person_id, requests)
            .await
    }

    pub async fn get_all_teams_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
        begin_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TeamsResponse, DomainError> {
        debug!(person_id, %begin_date, %end_date, "delegating get_all_teams_members");
        self.teams_dao
            .get_all_teams_members(person_id, requests, begin_date, end_date)
            .await
    }
}
